//! Per-window page session and event wiring.
//!
//! One [`WindowController`] exists per host window.  The host shell calls
//! `page_shown` on every page navigation and `window_unloaded` when the
//! window goes away; the controller owns the page-action lifecycle and
//! routes a click on the action into the subscription flow.  The core
//! never learns how the host delivers those events.

use std::sync::Arc;

use crate::feed::FeedDescriptor;
use crate::host::{FeedPrompt, PageAction, PageActionHost, PageActionId};
use crate::subscribe::{Subscription, SubscriptionManager};

/// Icon shown on the subscribe page action.
pub const SUBSCRIBE_ACTION_ICON: &str = "drawable://icon_openinapp";
/// Title shown on the subscribe page action.
pub const SUBSCRIBE_ACTION_TITLE: &str = "Add RSS feed to home page";

/// State tied to the currently shown page: the active page action and the
/// feeds the page advertised.  Created on page-show, replaced by the next
/// page-show, cleared on window unload.
struct PageSession {
    action: PageActionId,
    feeds: Vec<FeedDescriptor>,
}

/// Window-scoped controller wiring page navigation to subscriptions.
pub struct WindowController {
    actions: Arc<dyn PageActionHost>,
    prompt: Arc<dyn FeedPrompt>,
    manager: Arc<SubscriptionManager>,
    session: Option<PageSession>,
}

impl WindowController {
    pub fn new(
        actions: Arc<dyn PageActionHost>,
        prompt: Arc<dyn FeedPrompt>,
        manager: Arc<SubscriptionManager>,
    ) -> Self {
        Self {
            actions,
            prompt,
            manager,
            session: None,
        }
    }

    /// A new page is showing.  The previous page's action is always
    /// removed; a new one is added only when the page advertises feeds.
    pub fn page_shown(&mut self, feeds: Vec<FeedDescriptor>) {
        self.clear_session();

        if feeds.is_empty() {
            return;
        }

        let action = self.actions.add(PageAction {
            icon: SUBSCRIBE_ACTION_ICON.to_string(),
            title: SUBSCRIBE_ACTION_TITLE.to_string(),
        });
        self.session = Some(PageSession { action, feeds });
    }

    /// The user activated the page action.  One candidate feed subscribes
    /// directly; several go through the choice prompt.  Returns the minted
    /// ids when a subscription happened.
    pub async fn subscribe_requested(&self) -> Option<Subscription> {
        let session = self.session.as_ref()?;
        self.manager
            .choose_and_subscribe(self.prompt.as_ref(), &session.feeds)
            .await
    }

    /// The window is going away; drop its page action.
    pub fn window_unloaded(&mut self) {
        self.clear_session();
    }

    /// Whether a subscribe action is currently showing.
    pub fn has_page_action(&self) -> bool {
        self.session.is_some()
    }

    fn clear_session(&mut self) {
        if let Some(session) = self.session.take() {
            self.actions.remove(session.action);
        }
    }
}
