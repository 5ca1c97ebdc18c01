use bevy::prelude::*;

use super::components::*;
use crate::constants::*;

/// マスコットアバターをスポーンする。
/// `size` は呼び出し側の表示サイズ指定（ピクセル）であり、
/// 内部レイアウトは 256x256 の論理座標系で行う。
pub fn spawn_mascot_avatar(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    position: Vec2,
    size: f32,
    policy: GazePolicy,
) -> Entity {
    let scale = size / AVATAR_LOGICAL_SIZE;
    let eye_mesh = meshes.add(Circle::new(AVATAR_EYE_RADIUS));
    let eye_material = materials.add(ColorMaterial::from_color(COLOR_AVATAR_EYE));

    commands
        .spawn((
            MascotAvatar { policy },
            BlinkCycle::new(),
            Transform::from_translation(position.extend(Z_AVATAR))
                .with_scale(Vec3::splat(scale)),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                AvatarBadge,
                Mesh2d(meshes.add(Circle::new(AVATAR_BADGE_RADIUS))),
                MeshMaterial2d(materials.add(ColorMaterial::from_color(COLOR_AVATAR_BADGE))),
                Transform::from_xyz(0.0, 0.0, Z_AVATAR_BADGE),
            ));
            for rest in [AVATAR_EYE_REST_LEFT, AVATAR_EYE_REST_RIGHT] {
                parent.spawn((
                    AvatarEye { rest },
                    Mesh2d(eye_mesh.clone()),
                    MeshMaterial2d(eye_material.clone()),
                    Transform::from_translation(rest.extend(Z_AVATAR_EYE)),
                ));
            }
        })
        .id()
}
