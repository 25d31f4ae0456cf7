//! Carousel over the artist sequence
//!
//! One slide per artist, laid out on a horizontal track that is translated by
//! whole slide widths. The position lives in a signal owned by
//! [`SliderController`], which is the handle the page hands to the
//! navigation model. The view reports gestures and never touches the index.

use dioxus::prelude::*;
use exhibit_common::Carousel;

/// Minimum horizontal travel (px) for a pointer drag to count as a swipe
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Imperative handle to a [`SliderView`]. Positions are zero-based.
#[derive(Clone, Copy, PartialEq)]
pub struct SliderController {
    position: Signal<usize>,
    len: usize,
}

impl SliderController {
    /// Position without subscribing the caller.
    pub fn position(&self) -> usize {
        *self.position.peek()
    }

    /// Position, subscribing the calling component.
    pub fn current(&self) -> usize {
        *self.position.read()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Carousel for SliderController {
    fn go_to(&mut self, position: usize) {
        if self.len == 0 {
            return;
        }
        self.position.set(position.min(self.len - 1));
    }

    fn next(&mut self) {
        let position = self.position();
        if position + 1 < self.len {
            self.position.set(position + 1);
        }
    }

    fn prev(&mut self) {
        let position = self.position();
        if position > 0 {
            self.position.set(position - 1);
        }
    }
}

/// Hook creating the controller for a carousel of `len` slides.
pub fn use_slider(len: usize) -> SliderController {
    let position = use_signal(|| 0usize);
    SliderController { position, len }
}

/// What a finished pointer drag means for the carousel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Too short to count
    Ignored,
    /// Moves to this slide
    To(usize),
    /// Backward drag on the first slide
    PastFirst,
    /// Forward drag on the last slide
    PastLast,
}

/// Classify a drag of `dx` px starting at `position`.
///
/// Dragging left (negative `dx`) goes forward. Drags shorter than
/// [`SWIPE_THRESHOLD_PX`] are ignored.
pub fn classify_swipe(position: usize, len: usize, dx: f64) -> Swipe {
    if len == 0 || dx.abs() < SWIPE_THRESHOLD_PX {
        return Swipe::Ignored;
    }
    if dx < 0.0 {
        match position.checked_add(1) {
            Some(next) if next < len => Swipe::To(next),
            _ => Swipe::PastLast,
        }
    } else {
        match position.checked_sub(1) {
            Some(prev) => Swipe::To(prev),
            None => Swipe::PastFirst,
        }
    }
}

/// Slide a drag of `dx` px lands on, if it moves at all.
pub fn swipe_target(position: usize, len: usize, dx: f64) -> Option<usize> {
    match classify_swipe(position, len, dx) {
        Swipe::To(target) => Some(target),
        _ => None,
    }
}

/// Carousel view (pure, props-based)
#[component]
pub fn SliderView(
    controller: SliderController,
    /// Accept pointer swipes
    swipe_enabled: bool,
    /// Animate slide changes with a CSS transition
    animate: bool,
    /// A drag was recognised as a swipe
    on_swipe: EventHandler<()>,
    /// The carousel started moving to this position
    on_before_change: EventHandler<usize>,
    /// A forward swipe on the last slide
    #[props(into)]
    on_past_last: Option<EventHandler<()>>,
    /// One `div.slide` per artist
    children: Element,
) -> Element {
    let mut drag_start = use_signal(|| None::<f64>);

    let offset = controller.current() * 100;
    let transition = if animate { "transform 300ms ease" } else { "none" };

    rsx! {
        div {
            class: "slider",
            onpointerdown: move |evt: PointerEvent| {
                if swipe_enabled {
                    drag_start.set(Some(evt.client_coordinates().x));
                }
            },
            onpointerup: move |evt: PointerEvent| {
                let Some(start) = drag_start.take() else {
                    return;
                };
                let dx = evt.client_coordinates().x - start;
                match classify_swipe(controller.position(), controller.len(), dx) {
                    Swipe::To(target) => {
                        on_swipe.call(());
                        let mut handle = controller;
                        handle.go_to(target);
                        on_before_change.call(target);
                    }
                    Swipe::PastLast => {
                        if let Some(on_past_last) = on_past_last {
                            on_past_last.call(());
                        }
                    }
                    Swipe::Ignored | Swipe::PastFirst => {}
                }
            },
            onpointercancel: move |_| drag_start.set(None),
            div {
                class: "slider__track",
                style: "transform: translateX(-{offset}%); transition: {transition};",
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_drag_is_not_a_swipe() {
        assert_eq!(swipe_target(2, 5, 20.0), None);
        assert_eq!(swipe_target(2, 5, -49.0), None);
    }

    #[test]
    fn test_left_drag_goes_forward() {
        assert_eq!(swipe_target(2, 5, -120.0), Some(3));
        assert_eq!(swipe_target(4, 5, -120.0), None);
    }

    #[test]
    fn test_right_drag_goes_back() {
        assert_eq!(swipe_target(2, 5, 120.0), Some(1));
        assert_eq!(swipe_target(0, 5, 120.0), None);
    }

    #[test]
    fn test_empty_carousel() {
        assert_eq!(swipe_target(0, 0, -120.0), None);
        assert_eq!(classify_swipe(0, 0, -120.0), Swipe::Ignored);
    }

    #[test]
    fn test_forward_drag_on_last_slide_is_past_last() {
        assert_eq!(classify_swipe(4, 5, -120.0), Swipe::PastLast);
        assert_eq!(classify_swipe(4, 5, -SWIPE_THRESHOLD_PX), Swipe::PastLast);
        assert_eq!(classify_swipe(4, 5, -20.0), Swipe::Ignored);
    }

    #[test]
    fn test_backward_drag_on_first_slide_is_past_first() {
        assert_eq!(classify_swipe(0, 5, 120.0), Swipe::PastFirst);
        assert_eq!(classify_swipe(3, 5, 120.0), Swipe::To(2));
    }
}
