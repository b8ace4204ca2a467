//! Прокрутка окна и отложенная навигация.
//!
//! Changing the address while the page is scrolled down makes the layout
//! jump under the user as new content arrives. Navigation therefore waits
//! until a smooth scroll to the top has finished: a one-shot scroll listener
//! fires the pending transition once the offset reaches zero and removes
//! itself.

use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Как выполнить навигацию при данном смещении прокрутки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPlan {
    Immediate,
    AfterScrollToTop,
}

pub fn plan_navigation(scroll_y: f64) -> NavigationPlan {
    if scroll_y <= 0.0 {
        NavigationPlan::Immediate
    } else {
        NavigationPlan::AfterScrollToTop
    }
}

/// Одноразовый затвор для отложенного перехода.
///
/// Holds at most one pending target. A newer target replaces the older one,
/// and the target is released exactly once, on the first scroll event at
/// offset zero.
#[derive(Debug)]
pub struct ScrollGate<T> {
    pending: Option<T>,
}

impl<T> Default for ScrollGate<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> ScrollGate<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Зарядить затвор; возвращает вытесненную цель
    pub fn arm(&mut self, target: T) -> Option<T> {
        self.pending.replace(target)
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<T> {
        if scroll_y <= 0.0 {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn disarm(&mut self) -> Option<T> {
        self.pending.take()
    }
}

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_left(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Навигация, дожидающаяся прокрутки окна в самый верх.
///
/// At most one scroll listener is alive at a time. Call [`cancel`] on
/// unmount so that no listener outlives the page.
///
/// [`cancel`]: DeferredNavigator::cancel
#[derive(Clone)]
pub struct DeferredNavigator {
    gate: Rc<RefCell<ScrollGate<String>>>,
    listener: Rc<RefCell<Option<WindowListenerHandle>>>,
    go: Rc<dyn Fn(String)>,
}

impl DeferredNavigator {
    pub fn new(go: impl Fn(String) + 'static) -> Self {
        Self {
            gate: Rc::new(RefCell::new(ScrollGate::new())),
            listener: Rc::new(RefCell::new(None)),
            go: Rc::new(go),
        }
    }

    pub fn navigate(&self, url: String) {
        match plan_navigation(current_scroll_y()) {
            NavigationPlan::Immediate => {
                self.cancel();
                (self.go)(url);
            }
            NavigationPlan::AfterScrollToTop => {
                if let Some(replaced) = self.gate.borrow_mut().arm(url) {
                    log::debug!("pending navigation to {} replaced", replaced);
                }
                self.ensure_listener();
                smooth_scroll_to_top();
            }
        }
    }

    fn ensure_listener(&self) {
        if self.listener.borrow().is_some() {
            return;
        }

        let gate = self.gate.clone();
        let listener = self.listener.clone();
        let go = self.go.clone();
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let fired = gate.borrow_mut().on_scroll(current_scroll_y());
            if let Some(url) = fired {
                if let Some(handle) = listener.borrow_mut().take() {
                    handle.remove();
                }
                go(url);
            }
        });
        *self.listener.borrow_mut() = Some(handle);
    }

    /// Сбросить отложенный переход и снять слушатель
    pub fn cancel(&self) {
        self.gate.borrow_mut().disarm();
        if let Some(handle) = self.listener.borrow_mut().take() {
            handle.remove();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.gate.borrow().is_armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_navigation() {
        assert_eq!(plan_navigation(0.0), NavigationPlan::Immediate);
        assert_eq!(plan_navigation(480.0), NavigationPlan::AfterScrollToTop);
    }

    #[test]
    fn test_gate_fires_once_at_top() {
        let mut gate = ScrollGate::new();
        assert_eq!(gate.arm("/?page=2"), None);

        assert_eq!(gate.on_scroll(300.0), None);
        assert_eq!(gate.on_scroll(12.5), None);
        assert!(gate.is_armed());

        assert_eq!(gate.on_scroll(0.0), Some("/?page=2"));
        assert!(!gate.is_armed());
        // Повторные события на нуле ничего не запускают
        assert_eq!(gate.on_scroll(0.0), None);
    }

    #[test]
    fn test_gate_latest_target_wins() {
        let mut gate = ScrollGate::new();
        gate.arm("/?page=2");
        assert_eq!(gate.arm("/?page=3"), Some("/?page=2"));
        assert_eq!(gate.on_scroll(0.0), Some("/?page=3"));
    }

    #[test]
    fn test_gate_disarm() {
        let mut gate = ScrollGate::new();
        gate.arm("/?search=lamp");
        assert_eq!(gate.disarm(), Some("/?search=lamp"));
        assert_eq!(gate.on_scroll(0.0), None);
    }
}
