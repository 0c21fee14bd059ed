// Rigid skinning: each vertex follows the single bone named by its skin index.

use crate::model::{Animation, Mesh};
use nalgebra_glm as glm;

/// Positions and normals of a mesh posed at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PosedMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
}

/// Pose every vertex of `mesh` with the bone its skin index selects.
///
/// Vertices without a skin index keep their rest position. Normals are
/// rotated by the bone's 3x3 part and renormalized.
pub fn pose_mesh(mesh: &Mesh, animation: &Animation, time: f32) -> PosedMesh {
    let skin = mesh.skin.as_deref().unwrap_or_default();

    let positions = mesh
        .positions()
        .enumerate()
        .map(|(i, p)| match skin.get(i) {
            Some(&bone) => {
                let m = animation.pose_matrix(time, bone);
                let v = m * glm::vec4(p[0], p[1], p[2], 1.0);
                [v.x, v.y, v.z]
            }
            None => p,
        })
        .collect();

    let normals = mesh
        .normal_vectors()
        .enumerate()
        .map(|(i, n)| match skin.get(i) {
            Some(&bone) => {
                let m = glm::mat4_to_mat3(&animation.pose_matrix(time, bone));
                let v = m * glm::vec3(n[0], n[1], n[2]);
                if glm::length(&v) > f32::EPSILON {
                    let v = glm::normalize(&v);
                    [v.x, v.y, v.z]
                } else {
                    n
                }
            }
            None => n,
        })
        .collect();

    PosedMesh { positions, normals }
}
