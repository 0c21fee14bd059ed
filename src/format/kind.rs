use serde::{Deserialize, Serialize};

/// Semantic category of an attribute record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Meta,
    /// Mesh name.
    Mesh,
    Vert,
    Norm,
    Tint,
    /// Texture coordinates.
    Text,
    Skin,
    /// Animation name.
    Anim,
    Pose,
    Slot,
    Time,
    /// Any code not listed above. Skipped during assembly, decoded as floats
    /// when requested explicitly.
    Other(u8),
}

/// Element representation a kind decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Byte,
    Text,
    Index,
    Float,
}

impl AttributeKind {
    pub const MESH_KINDS: [AttributeKind; 6] = [
        AttributeKind::Mesh,
        AttributeKind::Vert,
        AttributeKind::Norm,
        AttributeKind::Tint,
        AttributeKind::Text,
        AttributeKind::Skin,
    ];

    pub const ANIMATION_KINDS: [AttributeKind; 4] = [
        AttributeKind::Anim,
        AttributeKind::Pose,
        AttributeKind::Slot,
        AttributeKind::Time,
    ];

    pub fn from_code(code: u8) -> Self {
        match code {
            0x00 => Self::Meta,
            0x10 => Self::Mesh,
            0x22 => Self::Vert,
            0x32 => Self::Norm,
            0x42 => Self::Tint,
            0x51 => Self::Text,
            0x60 => Self::Skin,
            0x70 => Self::Anim,
            0x8B => Self::Pose,
            0x90 => Self::Slot,
            0xA0 => Self::Time,
            other => Self::Other(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Meta => 0x00,
            Self::Mesh => 0x10,
            Self::Vert => 0x22,
            Self::Norm => 0x32,
            Self::Tint => 0x42,
            Self::Text => 0x51,
            Self::Skin => 0x60,
            Self::Anim => 0x70,
            Self::Pose => 0x8B,
            Self::Slot => 0x90,
            Self::Time => 0xA0,
            Self::Other(code) => code,
        }
    }

    pub fn element_type(self) -> ElementType {
        match self {
            Self::Meta => ElementType::Byte,
            Self::Mesh | Self::Anim => ElementType::Text,
            Self::Skin | Self::Slot => ElementType::Index,
            _ => ElementType::Float,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Meta => "META",
            Self::Mesh => "MESH",
            Self::Vert => "VERT",
            Self::Norm => "NORM",
            Self::Tint => "TINT",
            Self::Text => "TEXT",
            Self::Skin => "SKIN",
            Self::Anim => "ANIM",
            Self::Pose => "POSE",
            Self::Slot => "SLOT",
            Self::Time => "TIME",
            Self::Other(_) => "OTHER",
        }
    }
}

impl From<u8> for AttributeKind {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_back() {
        for kind in AttributeKind::MESH_KINDS
            .iter()
            .chain(AttributeKind::ANIMATION_KINDS.iter())
            .chain([AttributeKind::Meta].iter())
        {
            assert_eq!(AttributeKind::from_code(kind.code()), *kind);
        }
        assert_eq!(AttributeKind::from_code(0x8B), AttributeKind::Pose);
        assert_eq!(AttributeKind::from_code(0x33), AttributeKind::Other(0x33));
    }

    #[test]
    fn element_types_follow_category() {
        assert_eq!(AttributeKind::Meta.element_type(), ElementType::Byte);
        assert_eq!(AttributeKind::Mesh.element_type(), ElementType::Text);
        assert_eq!(AttributeKind::Anim.element_type(), ElementType::Text);
        assert_eq!(AttributeKind::Skin.element_type(), ElementType::Index);
        assert_eq!(AttributeKind::Slot.element_type(), ElementType::Index);
        assert_eq!(AttributeKind::Pose.element_type(), ElementType::Float);
        assert_eq!(AttributeKind::Other(0x33).element_type(), ElementType::Float);
    }
}
