//! GPU uniform block for the three garment materials.

use bytemuck::{Pod, Zeroable};

use crate::color::ColorCategory;
use crate::configurator::ResolvedColors;
use crate::scene::materials::FabricFinish;

/// One garment's material parameters, std140-compatible.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GarmentMaterial {
    /// Linear RGBA.
    pub base_color: [f32; 4],
    /// `[roughness, metalness, 0, 0]`.
    pub finish: [f32; 4],
}

impl GarmentMaterial {
    fn new(colors: &ResolvedColors, category: ColorCategory) -> Self {
        let finish = FabricFinish::for_category(category);
        Self {
            base_color: colors.get(category).to_linear_rgba(),
            finish: [finish.roughness, finish.metalness, 0.0, 0.0],
        }
    }
}

/// Suit, shirt, and accent materials in that order. Rebuilt and uploaded
/// after every selection change.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GarmentUniforms {
    pub suit: GarmentMaterial,
    pub shirt: GarmentMaterial,
    pub accent: GarmentMaterial,
}

impl GarmentUniforms {
    pub fn from_resolved(colors: &ResolvedColors) -> Self {
        Self {
            suit: GarmentMaterial::new(colors, ColorCategory::Suit),
            shirt: GarmentMaterial::new(colors, ColorCategory::Shirt),
            accent: GarmentMaterial::new(colors, ColorCategory::Accent),
        }
    }

    /// Raw bytes for a uniform buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorValue;

    fn colors() -> ResolvedColors {
        ResolvedColors {
            suit: ColorValue::from_u32(0x000000),
            shirt: ColorValue::from_u32(0xffffff),
            accent: ColorValue::from_u32(0xc6a664),
        }
    }

    #[test]
    fn test_uniform_block_is_96_bytes() {
        let uniforms = GarmentUniforms::from_resolved(&colors());
        assert_eq!(uniforms.as_bytes().len(), 96);
        assert_eq!(std::mem::size_of::<GarmentUniforms>(), 96);
    }

    #[test]
    fn test_materials_carry_linear_color_and_finish() {
        let uniforms = GarmentUniforms::from_resolved(&colors());
        assert_eq!(uniforms.suit.base_color, [0.0, 0.0, 0.0, 1.0]);
        assert!((uniforms.shirt.base_color[0] - 1.0).abs() < 1e-4);
        assert_eq!(uniforms.suit.finish, [0.3, 0.05, 0.0, 0.0]);
        assert_eq!(uniforms.accent.finish, [0.4, 0.1, 0.0, 0.0]);
    }

    #[test]
    fn test_bytes_follow_field_order() {
        let uniforms = GarmentUniforms::from_resolved(&colors());
        let floats: &[f32] = bytemuck::cast_slice(uniforms.as_bytes());
        // Shirt block starts after the suit's two vec4s.
        assert_eq!(floats[8..12], uniforms.shirt.base_color);
        assert_eq!(floats[20], 0.4);
    }
}
