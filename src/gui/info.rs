use three_d::egui::{Context, Grid, RichText, Ui, Window};

use super::declare_id;
use crate::registry::BodyId;
use crate::sim::SimState;

declare_id!(INFO_WINDOW, b"BodyInfo");
declare_id!(salt_only, INFO_GRID, b"InfoGrid");

/// What the info panel shows for one body. Pure data so the panel
/// contents can be checked without a ui.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct InfoPanelContent {
    pub name: &'static str,
    pub description: &'static str,
    pub diameter: &'static str,
    pub distance_from_sun: &'static str,
}

impl InfoPanelContent {
    pub(crate) fn for_body(id: BodyId) -> Self {
        let info = id.info();
        Self {
            name: info.display_name,
            description: info.description,
            diameter: info.diameter,
            distance_from_sun: info.distance_from_sun,
        }
    }
}

/// Shows the info window for the selected body, if any. The selection
/// is only ever replaced by another pick, so the window has no close
/// affordance; its contents just follow the selection.
pub(super) fn draw(ctx: &Context, state: &SimState) {
    let Some(selected) = state.selected else {
        return;
    };
    let content = InfoPanelContent::for_body(selected);

    Window::new(content.name)
        .id(*INFO_WINDOW_ID)
        .resizable(false)
        .show(ctx, |ui| window_contents(ui, &content));
}

fn window_contents(ui: &mut Ui, content: &InfoPanelContent) {
    ui.label(content.description);
    ui.separator();
    Grid::new(INFO_GRID_SALT).num_columns(2).show(ui, |ui| {
        ui.label("Diameter");
        ui.label(RichText::new(content.diameter).monospace());
        ui.end_row();
        ui.label("Distance from Sun");
        ui.label(RichText::new(content.distance_from_sun).monospace());
        ui.end_row();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_body_has_complete_panel_content() {
        for id in BodyId::iter() {
            let content = InfoPanelContent::for_body(id);
            assert!(!content.name.is_empty());
            assert!(!content.description.is_empty());
            assert!(content.diameter.ends_with("km"));
            assert!(content.distance_from_sun.ends_with("AU"));
        }
    }

    #[test]
    fn panel_content_is_stable_per_body() {
        assert_eq!(
            InfoPanelContent::for_body(BodyId::Earth),
            InfoPanelContent::for_body(BodyId::Earth)
        );
        assert_ne!(
            InfoPanelContent::for_body(BodyId::Earth),
            InfoPanelContent::for_body(BodyId::Mars)
        );
    }
}
