// Matrix Tools Hub - ui/panels/notifications.rs
//
// Stacked notification banners. Expiry is handled by the state layer
// (NotificationCenter::prune); this module only draws and forwards
// manual dismissals.

use crate::app::state::AppState;
use crate::core::config::NotificationPosition;
use crate::ui::theme;

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.config.features.notifications || state.notifications.is_empty() {
        return;
    }

    let (anchor, offset) = match state.config.settings.notifications.position {
        NotificationPosition::TopRight => (egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 56.0)),
        NotificationPosition::TopLeft => (egui::Align2::LEFT_TOP, egui::vec2(16.0, 56.0)),
        NotificationPosition::BottomRight => (egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -40.0)),
        NotificationPosition::BottomLeft => (egui::Align2::LEFT_BOTTOM, egui::vec2(16.0, -40.0)),
    };

    let mut dismiss = None;

    egui::Area::new(egui::Id::new("notification_stack"))
        .anchor(anchor, offset)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_max_width(theme::NOTIFICATION_WIDTH);
            for (index, notification) in state.notifications.iter().enumerate() {
                let (bg, fg) = theme::notification_colours(notification.kind);
                egui::Frame::default()
                    .fill(bg)
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&notification.message).color(fg),
                            );
                            if ui
                                .add(
                                    egui::Button::new(
                                        egui::RichText::new("\u{00d7}").color(fg).strong(),
                                    )
                                    .frame(false),
                                )
                                .clicked()
                            {
                                dismiss = Some(index);
                            }
                        });
                    });
                ui.add_space(6.0);
            }
        });

    if let Some(index) = dismiss {
        state.notifications.dismiss(index);
    }
}
