use bevy::prelude::*;

/// Camera carrying the primary egui context
///
/// Spawned once and kept across route changes so every screen draws into the
/// same context.
#[derive(Resource, Default)]
pub struct PersistentEguiCamera {
    pub entity: Option<Entity>,
}

pub fn setup_persistent_egui_camera(
    mut commands: Commands,
    mut persistent_camera: ResMut<PersistentEguiCamera>,
) {
    if persistent_camera.entity.is_some() {
        return;
    }

    let camera_entity = commands
        .spawn((Camera2d, Name::new("Persistent Egui Camera")))
        .id();

    persistent_camera.entity = Some(camera_entity);
    debug!("[UI] Egui camera spawned: {:?}", camera_entity);
}
