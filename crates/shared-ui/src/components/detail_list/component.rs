use dioxus::prelude::*;

/// A container for label/value pairs.
///
/// Each child `DetailItem` renders one row: the label on the left (muted)
/// and the value on the right.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// A single label/value row inside a `DetailList`.
///
/// Pass `value` for plain text. Children, when present, replace it so rows
/// can hold links or badges.
#[component]
pub fn DetailItem(
    label: String,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value",
                if has_children {
                    {children}
                } else {
                    span { "{value}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_renders_plain_value() {
        let html = dioxus_ssr::render_element(rsx! {
            DetailItem { label: "business_name", value: "Acme Ltd" }
        });
        assert!(html.contains("<dt class=\"detail-item-label\">business_name</dt>"));
        assert!(html.contains("Acme Ltd"));
    }

    #[test]
    fn children_replace_value() {
        let html = dioxus_ssr::render_element(rsx! {
            DetailItem { label: "files", value: "ignored",
                a { href: "/media/a.pdf", "a.pdf" }
            }
        });
        assert!(html.contains("href=\"/media/a.pdf\""));
        assert!(!html.contains("ignored"));
    }
}
