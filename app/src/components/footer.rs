//! Static report footer

use dioxus::prelude::*;

const KEY_FINDINGS: &[&str] = &[
    "Российские клиники догнали Mayo Clinic по функциональности (84% vs 77%)",
    "Критическая проблема — доступность: 6-48 WCAG-ошибок vs 1 у международных",
    "Половина сайтов пишут слишком сложно (Flesch < 30)",
    "28% жалоб в приложениях — на баги и вылеты",
];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer__insights",
                h3 { class: "footer__title", "Ключевые выводы" }
                ul { class: "footer__list",
                    for finding in KEY_FINDINGS {
                        li { "{finding}" }
                    }
                }
            }
            div { class: "footer__meta",
                p { "Исследование проведено в декабре 2025" }
                p {
                    a {
                        href: "https://usabilitylab.ru",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "UsabilityLab"
                    }
                }
            }
        }
    }
}
