//! Global progress indicator, counting in-flight operations.
//!
//! Every suspending action brackets itself with [`progress_start`] and
//! [`progress_finish`]; the bar is visible while any operation is still
//! running.

use dioxus::prelude::*;

const TOAST_CSS: Asset = asset!("/src/toast.css");

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressState {
    active: u32,
}

impl ProgressState {
    pub fn start(&mut self) {
        self.active += 1;
    }

    pub fn finish(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    pub fn is_busy(&self) -> bool {
        self.active > 0
    }
}

/// Get the progress counter.
pub fn use_progress() -> Signal<ProgressState> {
    use_context::<Signal<ProgressState>>()
}

pub fn progress_start(progress: &mut Signal<ProgressState>) {
    progress.write().start();
}

pub fn progress_finish(progress: &mut Signal<ProgressState>) {
    progress.write().finish();
}

/// Provider component that owns the counter and renders the top bar.
#[component]
pub fn ProgressProvider(children: Element) -> Element {
    let progress = use_signal(ProgressState::default);
    use_context_provider(|| progress);

    rsx! {
        document::Link { rel: "stylesheet", href: TOAST_CSS }
        if progress().is_busy() {
            div { class: "progress-bar" }
        }
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_while_any_operation_is_active() {
        let mut p = ProgressState::default();
        assert!(!p.is_busy());

        p.start();
        p.start();
        assert!(p.is_busy());

        p.finish();
        assert!(p.is_busy());
        p.finish();
        assert!(!p.is_busy());
    }

    #[test]
    fn finish_never_underflows() {
        let mut p = ProgressState::default();
        p.finish();
        assert!(!p.is_busy());
        p.start();
        assert!(p.is_busy());
    }
}
