use super::Text;
use serde::{Deserialize, Serialize};

/// Mesh geometry for one entity index. Every buffer is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub name: Option<Text>,
    pub vertices: Option<Vec<f32>>,
    pub normals: Option<Vec<f32>>,
    pub tint: Option<Vec<f32>>,
    pub tex_coords: Option<Vec<f32>>,
    pub skin: Option<Vec<u32>>,
}

impl Mesh {
    /// No name and no vertices: the entity does not exist in the stream.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.vertices.is_none()
    }

    pub fn name_str(&self) -> Option<String> {
        self.name.as_ref().map(|n| n.to_str_lossy().into_owned())
    }

    pub fn name_size(&self) -> usize {
        self.name.as_ref().map_or(0, Text::len)
    }

    pub fn vertex_size(&self) -> usize {
        size_of_buffer(&self.vertices)
    }

    pub fn normal_size(&self) -> usize {
        size_of_buffer(&self.normals)
    }

    pub fn tint_size(&self) -> usize {
        size_of_buffer(&self.tint)
    }

    pub fn tex_coord_size(&self) -> usize {
        size_of_buffer(&self.tex_coords)
    }

    pub fn skin_size(&self) -> usize {
        size_of_buffer(&self.skin)
    }

    /// Vertex positions as xyz triples. A trailing partial triple is dropped.
    pub fn positions(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        triples(&self.vertices)
    }

    pub fn normal_vectors(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        triples(&self.normals)
    }

    pub fn uvs(&self) -> impl Iterator<Item = [f32; 2]> + '_ {
        self.tex_coords
            .as_deref()
            .unwrap_or_default()
            .chunks_exact(2)
            .map(|c| [c[0], c[1]])
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_size() / 3
    }
}

fn size_of_buffer<T>(buffer: &Option<Vec<T>>) -> usize {
    buffer.as_ref().map_or(0, Vec::len)
}

fn triples(buffer: &Option<Vec<f32>>) -> impl Iterator<Item = [f32; 3]> + '_ {
    buffer
        .as_deref()
        .unwrap_or_default()
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
}
