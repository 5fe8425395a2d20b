//! Toast notifications, held in a context signal.
//!
//! Error toasts close themselves after [`ERROR_AUTO_CLOSE_MS`]; success toasts
//! stay until the user dismisses them.

use dioxus::prelude::*;

const TOAST_CSS: Asset = asset!("/src/toast.css");

/// Close timeout applied to error toasts.
pub const ERROR_AUTO_CLOSE_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub level: NoticeLevel,
    /// Close timeout in milliseconds; `None` means sticky until dismissed.
    pub auto_close_ms: Option<u32>,
}

/// The live set of toasts plus the id counter for new ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeStack {
    next_id: u64,
    pub notices: Vec<Notice>,
}

impl NoticeStack {
    pub fn push(&mut self, title: &str, message: &str, level: NoticeLevel) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let auto_close_ms = match level {
            NoticeLevel::Error => Some(ERROR_AUTO_CLOSE_MS),
            NoticeLevel::Success => None,
        };
        self.notices.push(Notice {
            id,
            title: title.to_string(),
            message: message.to_string(),
            level,
            auto_close_ms,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }
}

/// Get the notification stack.
pub fn use_notifications() -> Signal<NoticeStack> {
    use_context::<Signal<NoticeStack>>()
}

pub fn notify_success(stack: &mut Signal<NoticeStack>, title: &str, message: &str) {
    stack.write().push(title, message, NoticeLevel::Success);
}

pub fn notify_error(stack: &mut Signal<NoticeStack>, title: &str, message: &str) {
    stack.write().push(title, message, NoticeLevel::Error);
}

/// Provider component that owns the stack and renders the toasts on top of
/// its children.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let stack = use_signal(NoticeStack::default);
    use_context_provider(|| stack);

    rsx! {
        {children}
        NoticeHost {}
    }
}

#[component]
fn NoticeHost() -> Element {
    let stack = use_notifications();

    rsx! {
        document::Link { rel: "stylesheet", href: TOAST_CSS }
        div {
            class: "toast-stack",
            for notice in stack().notices.iter() {
                NoticeToast { key: "{notice.id}", notice: notice.clone() }
            }
        }
    }
}

#[component]
fn NoticeToast(notice: Notice) -> Element {
    let mut stack = use_notifications();
    let id = notice.id;

    // Arm the close timer once, when the toast first renders.
    #[cfg(target_arch = "wasm32")]
    {
        let auto_close_ms = notice.auto_close_ms;
        use_effect(move || {
            if let Some(ms) = auto_close_ms {
                spawn(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(ms.into())).await;
                    stack.write().dismiss(id);
                });
            }
        });
    }

    let level_class = match notice.level {
        NoticeLevel::Success => "toast toast-success",
        NoticeLevel::Error => "toast toast-error",
    };

    rsx! {
        div {
            class: "{level_class}",
            div {
                class: "toast-body",
                div { class: "toast-title", "{notice.title}" }
                div { class: "toast-message", "{notice.message}" }
            }
            button {
                class: "toast-close",
                onclick: move |_| stack.write().dismiss(id),
                "\u{00d7}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_get_a_close_timeout_successes_stick() {
        let mut stack = NoticeStack::default();
        let err_id = stack.push("Failed", "boom", NoticeLevel::Error);
        let ok_id = stack.push("Saved", "done", NoticeLevel::Success);

        let err = stack.notices.iter().find(|n| n.id == err_id).unwrap();
        let ok = stack.notices.iter().find(|n| n.id == ok_id).unwrap();
        assert_eq!(err.auto_close_ms, Some(ERROR_AUTO_CLOSE_MS));
        assert_eq!(ok.auto_close_ms, None);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut stack = NoticeStack::default();
        let first = stack.push("a", "a", NoticeLevel::Error);
        let second = stack.push("b", "b", NoticeLevel::Success);

        stack.dismiss(first);
        assert_eq!(stack.notices.len(), 1);
        assert_eq!(stack.notices[0].id, second);

        // Dismissing an unknown id is a no-op
        stack.dismiss(999);
        assert_eq!(stack.notices.len(), 1);
    }

    #[test]
    fn ids_are_unique_across_pushes() {
        let mut stack = NoticeStack::default();
        let a = stack.push("a", "a", NoticeLevel::Error);
        stack.dismiss(a);
        let b = stack.push("b", "b", NoticeLevel::Error);
        assert_ne!(a, b);
    }
}
