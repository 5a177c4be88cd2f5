//! Page header with dataset counts

use dioxus::prelude::*;

use clinic_audit_core::AuditMeta;

#[component]
pub fn Header(meta: AuditMeta) -> Element {
    rsx! {
        header { class: "header",
            div { class: "header__content",
                h1 { class: "header__title", "UX-аудит медицинских клиник" }
                p { class: "header__subtitle",
                    "{meta.total_clinics} клиник · {meta.checklist_items} элементов · {meta.total_reviews} отзывов"
                }
                p { class: "header__date",
                    i { class: "fa-solid fa-calendar" }
                    " {meta.audit_date}"
                }
            }
        }
    }
}
