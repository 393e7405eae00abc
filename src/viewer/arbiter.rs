// SPDX-License-Identifier: MPL-2.0
//! Gesture routing.
//!
//! [`GestureArbiter`] maps each raw input event to exactly one viewport,
//! drawer or info-panel operation on the session's active page. It keeps no state: the
//! session it is handed is the only thing it mutates, and events are applied
//! strictly one after another, so every "changed" event of a drag or pinch
//! lands before the single "ended" event that commits it.

use crate::domain::page::PageId;
use crate::domain::viewport::{Offset, ZoomDirection};
use crate::error::Result;
use crate::viewer::session::ViewerSession;
use crate::viewer::transform::Transition;

/// Raw input event forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    DoubleTap,
    DragChanged { dx: f32, dy: f32 },
    DragEnded,
    PinchChanged { magnitude: f32 },
    PinchEnded,
    ZoomButton(ZoomDirection),
    ZoomResetButton,
    DrawerToggle,
    ThumbnailSelected(PageId),
    /// Long press on the info hotspot.
    InfoPanelToggle,
}

/// Broad family an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Tap,
    Drag,
    Pinch,
    Button,
    Drawer,
    LongPress,
}

impl GestureEvent {
    #[must_use]
    pub fn kind(self) -> GestureKind {
        match self {
            GestureEvent::DoubleTap => GestureKind::Tap,
            GestureEvent::DragChanged { .. } | GestureEvent::DragEnded => GestureKind::Drag,
            GestureEvent::PinchChanged { .. } | GestureEvent::PinchEnded => GestureKind::Pinch,
            GestureEvent::ZoomButton(_) | GestureEvent::ZoomResetButton => GestureKind::Button,
            GestureEvent::DrawerToggle | GestureEvent::ThumbnailSelected(_) => {
                GestureKind::Drawer
            }
            GestureEvent::InfoPanelToggle => GestureKind::LongPress,
        }
    }

    /// Returns true for the terminal event of a continuous gesture.
    #[must_use]
    pub fn is_committal(self) -> bool {
        matches!(self, GestureEvent::DragEnded | GestureEvent::PinchEnded)
    }
}

/// What a dispatched event changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// The active page's viewport went through the given rule.
    Viewport(Transition),
    /// The drawer was toggled to the given visibility.
    Drawer { is_open: bool },
    /// A new page became active and its viewport was reset.
    PageSelected { id: PageId, index: usize },
    /// The scale/offset readout was shown or hidden.
    InfoPanel { is_visible: bool },
}

/// Stateless event dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureArbiter;

impl GestureArbiter {
    /// Applies one event to the session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPage`](crate::error::Error::InvalidPage) for a
    /// thumbnail selection naming an unknown page; nothing is mutated then.
    pub fn dispatch(session: &mut ViewerSession, event: GestureEvent) -> Result<Effect> {
        let effect = match event {
            GestureEvent::ThumbnailSelected(id) => match session.select_page(id) {
                Ok(index) => {
                    tracing::info!(page = %id, index, "page selected");
                    Effect::PageSelected { id, index }
                }
                Err(err) => {
                    tracing::warn!(page = %id, error = %err, "page selection rejected");
                    return Err(err);
                }
            },
            GestureEvent::DrawerToggle => Effect::Drawer {
                is_open: session.drawer_mut().toggle_drawer(),
            },
            GestureEvent::InfoPanelToggle => Effect::InfoPanel {
                is_visible: session.toggle_info_panel(),
            },
            GestureEvent::DoubleTap => Effect::Viewport(session.viewport_mut().apply_double_tap()),
            GestureEvent::DragChanged { dx, dy } => {
                Effect::Viewport(session.viewport_mut().apply_drag_changed(Offset::new(dx, dy)))
            }
            GestureEvent::DragEnded => Effect::Viewport(session.viewport_mut().apply_drag_ended()),
            GestureEvent::PinchChanged { magnitude } => {
                Effect::Viewport(session.viewport_mut().apply_pinch_changed(magnitude))
            }
            GestureEvent::PinchEnded => Effect::Viewport(session.viewport_mut().apply_pinch_ended()),
            GestureEvent::ZoomButton(direction) => {
                Effect::Viewport(session.viewport_mut().apply_zoom_button(direction))
            }
            GestureEvent::ZoomResetButton => {
                Effect::Viewport(session.viewport_mut().apply_zoom_reset_button())
            }
        };

        let kind = event.kind();
        let committal = event.is_committal();
        match effect {
            Effect::Viewport(transition) if transition.is_normalization() => {
                tracing::debug!(?kind, committal, ?event, ?transition, "gesture normalized");
            }
            Effect::Viewport(transition) => {
                tracing::debug!(?kind, committal, ?event, ?transition, "gesture applied");
            }
            Effect::Drawer { .. } | Effect::InfoPanel { .. } => {
                tracing::trace!(?kind, ?effect, "control toggled");
            }
            Effect::PageSelected { .. } => {}
        }

        Ok(effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PageCatalog;
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;

    fn session() -> ViewerSession {
        ViewerSession::new(PageCatalog::reference())
    }

    #[test]
    fn double_tap_routes_to_active_viewport() {
        let mut session = session();

        let effect = GestureArbiter::dispatch(&mut session, GestureEvent::DoubleTap);

        assert_eq!(effect, Ok(Effect::Viewport(Transition::DoubleTapZoomIn)));
        assert_abs_diff_eq!(session.viewport().scale(), 5.0);
    }

    #[test]
    fn changed_events_all_apply_before_commit() {
        let mut session = session();
        for magnitude in [1.5, 3.0, 4.5, 7.2] {
            GestureArbiter::dispatch(&mut session, GestureEvent::PinchChanged { magnitude })
                .expect("pinch never fails");
        }
        assert_abs_diff_eq!(session.viewport().scale(), 7.2);

        let effect = GestureArbiter::dispatch(&mut session, GestureEvent::PinchEnded);
        assert_eq!(effect, Ok(Effect::Viewport(Transition::PinchClampedToMax)));
        assert_eq!(session.viewport().scale(), 5.0);
    }

    #[test]
    fn drawer_toggle_does_not_touch_viewport() {
        let mut session = session();
        GestureArbiter::dispatch(&mut session, GestureEvent::DoubleTap).expect("tap");

        let effect = GestureArbiter::dispatch(&mut session, GestureEvent::DrawerToggle);

        assert_eq!(effect, Ok(Effect::Drawer { is_open: true }));
        assert_abs_diff_eq!(session.viewport().scale(), 5.0);
    }

    #[test]
    fn thumbnail_selection_switches_and_resets_page() {
        let mut session = session();

        let effect = GestureArbiter::dispatch(
            &mut session,
            GestureEvent::ThumbnailSelected(PageId::new(4)),
        );

        assert_eq!(
            effect,
            Ok(Effect::PageSelected {
                id: PageId::new(4),
                index: 3
            })
        );
        assert_eq!(session.current_page().id(), PageId::new(4));
    }

    #[test]
    fn unknown_thumbnail_is_rejected() {
        let mut session = session();

        let effect = GestureArbiter::dispatch(
            &mut session,
            GestureEvent::ThumbnailSelected(PageId::new(99)),
        );

        assert_eq!(effect, Err(Error::InvalidPage { id: 99 }));
        assert_eq!(session.drawer().current_page_index(), 0);
    }

    #[test]
    fn info_panel_toggle_leaves_viewport_and_drawer_alone() {
        let mut session = session();
        GestureArbiter::dispatch(&mut session, GestureEvent::DoubleTap).expect("tap");

        let shown = GestureArbiter::dispatch(&mut session, GestureEvent::InfoPanelToggle);
        assert_eq!(shown, Ok(Effect::InfoPanel { is_visible: true }));
        assert!(session.info_panel_visible());
        assert_abs_diff_eq!(session.viewport().scale(), 5.0);
        assert!(!session.drawer().is_open());

        let hidden = GestureArbiter::dispatch(&mut session, GestureEvent::InfoPanelToggle);
        assert_eq!(hidden, Ok(Effect::InfoPanel { is_visible: false }));
        assert!(!session.info_panel_visible());
    }

    #[test]
    fn event_kinds_and_committal_points() {
        assert_eq!(GestureEvent::DragEnded.kind(), GestureKind::Drag);
        assert_eq!(
            GestureEvent::PinchChanged { magnitude: 2.0 }.kind(),
            GestureKind::Pinch
        );
        assert_eq!(
            GestureEvent::ZoomButton(ZoomDirection::In).kind(),
            GestureKind::Button
        );
        assert_eq!(GestureEvent::InfoPanelToggle.kind(), GestureKind::LongPress);
        assert!(GestureEvent::PinchEnded.is_committal());
        assert!(!GestureEvent::DragChanged { dx: 1.0, dy: 1.0 }.is_committal());
        assert!(!GestureEvent::DoubleTap.is_committal());
    }
}
