// Entity assembly: one scan per attribute kind, packed into a record.
//
// Buffers are held in locals until every scan has succeeded, so an error
// part way through drops what was already decoded and no partial record
// escapes.

use super::scanner::{scan, AttributeData};
use crate::error::MatResult;
use crate::format::{AttributeKind, Schema};
use crate::model::{Animation, Mesh};
use crate::source::ByteSource;
use log::{debug, warn};

/// Decode the mesh at `index`. An empty mesh means there is no such entity.
pub fn assemble_mesh<S: ByteSource + ?Sized>(
    source: &mut S,
    schema: &Schema,
    index: u32,
) -> MatResult<Mesh> {
    let mut fetch = |kind| scan(&mut *source, schema, index, kind);

    let name = fetch(AttributeKind::Mesh)?.and_then(AttributeData::into_text);
    let vertices = fetch(AttributeKind::Vert)?.and_then(AttributeData::into_floats);
    let normals = fetch(AttributeKind::Norm)?.and_then(AttributeData::into_floats);
    let tint = fetch(AttributeKind::Tint)?.and_then(AttributeData::into_floats);
    let tex_coords = fetch(AttributeKind::Text)?.and_then(AttributeData::into_floats);
    let skin = fetch(AttributeKind::Skin)?.and_then(AttributeData::into_indices);

    let mesh = Mesh {
        name,
        vertices,
        normals,
        tint,
        tex_coords,
        skin,
    };

    if mesh.is_empty() {
        debug!("mesh {index} not present");
    } else {
        debug!(
            "mesh {index} {:?}: {} vertex values, {} normal values, {} skin indices",
            mesh.name_str().unwrap_or_default(),
            mesh.vertex_size(),
            mesh.normal_size(),
            mesh.skin_size()
        );
    }
    Ok(mesh)
}

/// Decode the animation at `index`.
///
/// `None` when pose, slot or time data is missing or empty; the name is the
/// only optional part.
pub fn assemble_animation<S: ByteSource + ?Sized>(
    source: &mut S,
    schema: &Schema,
    index: u32,
) -> MatResult<Option<Animation>> {
    let mut fetch = |kind| scan(&mut *source, schema, index, kind);

    let name = fetch(AttributeKind::Anim)?.and_then(AttributeData::into_text);
    let pose = fetch(AttributeKind::Pose)?.and_then(AttributeData::into_floats);
    let slots = fetch(AttributeKind::Slot)?.and_then(AttributeData::into_indices);
    let times = fetch(AttributeKind::Time)?.and_then(AttributeData::into_floats);

    let (Some(pose), Some(slots), Some(times)) = (pose, slots, times) else {
        if name.is_some() {
            warn!("animation {index} has a name but lacks pose, slot or time data");
        } else {
            debug!("animation {index} not present");
        }
        return Ok(None);
    };

    let animation = Animation::new(name, pose, slots, times);
    match &animation {
        Some(a) => debug!(
            "animation {index} {:?}: {} keyframes, {} pose values, duration {}",
            a.name_str().unwrap_or_default(),
            a.frame_count(),
            a.pose().len(),
            a.duration()
        ),
        None => warn!("animation {index} rejected: empty pose, slot or time data"),
    }
    Ok(animation)
}
