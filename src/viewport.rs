use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::reveal::RevealSet;

/// Fire slightly before the element's bottom edge scrolls fully in.
pub const REVEAL_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Attribute carrying a card's position so observer callbacks can map an
/// entry back to its index.
pub const INDEX_ATTR: &str = "data-reveal-index";

/// What an observer callback wants done with the element it just saw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    Continue,
    Stop,
}

/// Whether a hook keeps reporting after the first time the element is seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Always,
    Once,
}

impl Trigger {
    /// `Always` tracks the element's real bounds; `Once` uses the reveal
    /// margin so the animation starts just after the element scrolls in.
    pub fn margin(self) -> &'static str {
        match self {
            Trigger::Always => "0px",
            Trigger::Once => REVEAL_MARGIN,
        }
    }

    pub fn threshold(self) -> f64 {
        match self {
            Trigger::Always => 0.0,
            Trigger::Once => REVEAL_THRESHOLD,
        }
    }

    /// The flag to publish for an observer entry, if any, and whether to keep
    /// observing. `Once` only ever publishes `true`.
    pub fn on_entry(self, visible: bool) -> (Option<bool>, Watch) {
        match self {
            Trigger::Always => (Some(visible), Watch::Continue),
            Trigger::Once if visible => (Some(true), Watch::Stop),
            Trigger::Once => (None, Watch::Continue),
        }
    }
}

/// Maps a card's observer entry to the index to reveal. A card is released
/// once revealed; cards without a readable index keep being observed.
pub fn card_entry(raw_index: Option<&str>, visible: bool) -> (Option<usize>, Watch) {
    if !visible {
        return (None, Watch::Continue);
    }
    match raw_index.and_then(|raw| raw.parse::<usize>().ok()) {
        Some(index) => (Some(index), Watch::Stop),
        None => (None, Watch::Continue),
    }
}

/// An `IntersectionObserver` together with the closure it calls.
///
/// Dropping it disconnects the observer and frees the closure.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportWatch {
    pub fn new<F>(margin: &str, threshold: f64, mut on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(&Element, bool) -> Watch + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if on_change(&target, entry.is_intersecting()) == Watch::Stop {
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(margin);
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn report_failure(what: &str, err: JsValue) {
    log::error!("could not observe {}", what);
    gloo_console::error!("IntersectionObserver:", err);
}

/// Tracks whether `node` is in the viewport.
///
/// With `Trigger::Once` the flag latches to `true` on first sight and the
/// element is no longer observed. `initial` is reported until the observer
/// delivers its first entry.
#[hook]
pub fn use_in_view(node: NodeRef, trigger: Trigger, initial: bool) -> bool {
    let in_view = use_state_eq(|| initial);

    {
        let setter = in_view.setter();
        use_effect_with_deps(
            move |(node, trigger)| {
                let trigger = *trigger;
                let watch = node.cast::<Element>().and_then(|element| {
                    let result = ViewportWatch::new(trigger.margin(), trigger.threshold(), move |_, visible| {
                        let (flag, watch) = trigger.on_entry(visible);
                        if let Some(flag) = flag {
                            setter.set(flag);
                        }
                        watch
                    });
                    match result {
                        Ok(watch) => {
                            watch.observe(&element);
                            Some(watch)
                        }
                        Err(err) => {
                            report_failure(&element.tag_name(), err);
                            None
                        }
                    }
                });

                move || drop(watch)
            },
            (node, trigger),
        );
    }

    *in_view
}

/// Node refs for `count` cards plus the set of cards revealed so far.
///
/// Each element attached to a returned ref must carry its index in
/// [`INDEX_ATTR`]. Cards stop being observed once revealed.
#[hook]
pub fn use_reveal(count: usize) -> (Rc<Vec<NodeRef>>, UseReducerHandle<RevealSet>) {
    let refs = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        count,
    );
    let revealed = use_reducer(RevealSet::default);

    {
        let dispatcher = revealed.dispatcher();
        use_effect_with_deps(
            move |refs: &Rc<Vec<NodeRef>>| {
                let watch = ViewportWatch::new(REVEAL_MARGIN, REVEAL_THRESHOLD, move |target, visible| {
                    let index = target.get_attribute(INDEX_ATTR);
                    let (reveal, watch) = card_entry(index.as_deref(), visible);
                    if let Some(index) = reveal {
                        dispatcher.dispatch(index);
                    }
                    watch
                });

                let watch = match watch {
                    Ok(watch) => {
                        let mut attached = 0;
                        for element in refs.iter().filter_map(|node| node.cast::<Element>()) {
                            watch.observe(&element);
                            attached += 1;
                        }
                        log::debug!("watching {} cards", attached);
                        Some(watch)
                    }
                    Err(err) => {
                        report_failure("cards", err);
                        None
                    }
                };

                move || drop(watch)
            },
            refs.clone(),
        );
    }

    (refs, revealed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(trigger: Trigger, entries: &[bool], initial: bool) -> (Vec<bool>, Vec<Watch>) {
        let mut flag = initial;
        let mut seen = Vec::new();
        let mut watches = Vec::new();
        for &visible in entries {
            let (next, watch) = trigger.on_entry(visible);
            if let Some(next) = next {
                flag = next;
            }
            seen.push(flag);
            watches.push(watch);
            if watch == Watch::Stop {
                break;
            }
        }
        (seen, watches)
    }

    #[test]
    fn once_latches_on_first_sight_and_stops_watching() {
        assert_eq!(Trigger::Once.on_entry(true), (Some(true), Watch::Stop));

        let (seen, watches) = replay(Trigger::Once, &[false, true, false, true], false);
        assert_eq!(seen, vec![false, true]);
        assert_eq!(watches, vec![Watch::Continue, Watch::Stop]);
    }

    #[test]
    fn once_never_publishes_out_of_view() {
        assert_eq!(Trigger::Once.on_entry(false), (None, Watch::Continue));

        let (seen, _) = replay(Trigger::Once, &[false, false], true);
        assert_eq!(seen, vec![true, true]);
    }

    #[test]
    fn always_follows_visibility_both_ways() {
        let (seen, watches) = replay(Trigger::Always, &[true, false, true], true);
        assert_eq!(seen, vec![true, false, true]);
        assert!(watches.iter().all(|watch| *watch == Watch::Continue));
    }

    #[test]
    fn always_watches_the_real_bounds() {
        assert_eq!(Trigger::Always.margin(), "0px");
        assert_eq!(Trigger::Always.threshold(), 0.0);
        assert_eq!(Trigger::Once.margin(), REVEAL_MARGIN);
        assert_eq!(Trigger::Once.threshold(), REVEAL_THRESHOLD);
    }

    #[test]
    fn visible_card_is_revealed_and_released() {
        assert_eq!(card_entry(Some("3"), true), (Some(3), Watch::Stop));
    }

    #[test]
    fn hidden_or_unindexed_cards_stay_observed() {
        assert_eq!(card_entry(Some("3"), false), (None, Watch::Continue));
        assert_eq!(card_entry(None, true), (None, Watch::Continue));
        assert_eq!(card_entry(Some("first"), true), (None, Watch::Continue));
    }
}
