//! Trailing cursor ring that eases toward the pointer once per animation frame.

use leptos::leptos_dom::helpers::{
    request_animation_frame_with_handle, AnimationFrameRequestHandle, WindowListenerHandle,
};
use leptos::*;
use wasm_bindgen::JsCast;

/// Fraction of the remaining distance the ring covers each frame.
const EASING: f64 = 0.12;
/// Below this distance (px) the ring snaps onto the pointer and the frame loop idles.
const SETTLE_DISTANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorTrail {
    pub ring: (f64, f64),
    pub pointer: (f64, f64),
    pub over_link: bool,
    pub visible: bool,
}

impl CursorTrail {
    pub fn pointer_moved(&mut self, x: f64, y: f64, over_link: bool) {
        self.pointer = (x, y);
        self.over_link = over_link;
        self.visible = true;
    }

    pub fn is_settled(&self) -> bool {
        (self.pointer.0 - self.ring.0).abs() < SETTLE_DISTANCE
            && (self.pointer.1 - self.ring.1).abs() < SETTLE_DISTANCE
    }

    /// Moves the ring one frame closer to the pointer.
    pub fn step(&mut self) {
        if self.is_settled() {
            self.ring = self.pointer;
            return;
        }
        self.ring.0 += (self.pointer.0 - self.ring.0) * EASING;
        self.ring.1 += (self.pointer.1 - self.ring.1) * EASING;
    }

    pub fn ring_style(&self) -> String {
        let (scale, opacity) = match (self.visible, self.over_link) {
            (false, _) => (1.0, 0.0),
            (true, true) => (1.8, 0.6),
            (true, false) => (1.0, 0.4),
        };
        format!(
            "transform:translate3d({}px,{}px,0) translate(-50%,-50%) scale({scale});opacity:{opacity}",
            self.ring.0, self.ring.1
        )
    }

    pub fn dot_style(&self) -> String {
        let scale = if self.over_link { 0.0 } else { 1.0 };
        let opacity = if self.visible { 1.0 } else { 0.0 };
        format!(
            "transform:translate3d({}px,{}px,0) translate(-50%,-50%) scale({scale});opacity:{opacity}",
            self.pointer.0, self.pointer.1
        )
    }
}

fn over_link(ev: &web_sys::MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest("button, a").ok().flatten())
        .is_some()
}

fn schedule_frame(trail: RwSignal<CursorTrail>, frame: StoredValue<Option<AnimationFrameRequestHandle>>) {
    let next = request_animation_frame_with_handle(move || {
        let Some(moving) = trail.try_with_untracked(|t| t.ring != t.pointer) else {
            return;
        };
        if moving {
            trail.update(CursorTrail::step);
        }
        schedule_frame(trail, frame);
    });
    match next {
        Ok(handle) => {
            let _ = frame.try_update_value(|slot| *slot = Some(handle));
        }
        Err(err) => logging::warn!("cursor animation frame failed: {err:?}"),
    }
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    let trail = create_rw_signal(CursorTrail::default());
    let frame = store_value(None::<AnimationFrameRequestHandle>);

    let listeners: Vec<WindowListenerHandle> = vec![
        window_event_listener(ev::mousemove, move |ev| {
            let hovering = over_link(&ev);
            trail.update(|t| t.pointer_moved(f64::from(ev.client_x()), f64::from(ev.client_y()), hovering));
        }),
        window_event_listener(ev::mouseout, move |ev| {
            if ev.related_target().is_none() {
                trail.update(|t| t.visible = false);
            }
        }),
    ];
    schedule_frame(trail, frame);

    on_cleanup(move || {
        for listener in listeners {
            listener.remove();
        }
        if let Some(handle) = frame.try_update_value(Option::take).flatten() {
            handle.cancel();
        }
    });

    view! {
        <div class="cursor-ring" aria-hidden="true" style=move || trail.with(CursorTrail::ring_style)></div>
        <div class="cursor-dot" aria-hidden="true" style=move || trail.with(CursorTrail::dot_style)></div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ring_eases_toward_pointer_then_snaps() {
        let mut trail = CursorTrail::default();
        trail.pointer_moved(100.0, 50.0, false);

        trail.step();
        assert!((trail.ring.0 - 12.0).abs() < 1e-9);
        assert!((trail.ring.1 - 6.0).abs() < 1e-9);

        for _ in 0..200 {
            trail.step();
        }
        assert_eq!(trail.ring, trail.pointer);
        assert!(trail.is_settled());
    }

    #[test]
    fn links_enlarge_ring_and_hide_dot() {
        let mut trail = CursorTrail::default();
        assert!(trail.ring_style().ends_with("opacity:0"));

        trail.pointer_moved(10.0, 20.0, true);
        assert!(trail.ring_style().contains("scale(1.8);opacity:0.6"));
        assert!(trail.dot_style().contains("scale(0);opacity:1"));
    }
}
