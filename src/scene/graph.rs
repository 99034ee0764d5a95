use crate::{foundation::core::Vec3, scene::params::ParameterSet};

const GOLD: &str = "#FFD700";
const WHITE: &str = "#FFFFFF";

/// Name of the inner glowing mesh.
pub const INNER_CORE: &str = "inner-core";
/// Name of the outer glass mesh.
pub const SHELL: &str = "shell";

/// Perspective camera.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Camera {
    /// Eye position.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
}

/// Scene light.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Light {
    /// Uniform fill.
    Ambient {
        /// Intensity.
        intensity: f64,
    },
    /// Cone light.
    Spot {
        /// Position.
        position: Vec3,
        /// Cone half-angle in radians.
        angle: f64,
        /// Edge softness in `[0, 1]`.
        penumbra: f64,
        /// Intensity.
        intensity: f64,
        /// Hex color.
        color: String,
    },
    /// Omnidirectional light.
    Point {
        /// Position.
        position: Vec3,
        /// Intensity.
        intensity: f64,
        /// Hex color.
        color: String,
    },
}

/// Physically based material parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Material {
    /// Base hex color.
    pub color: String,
    /// Emissive hex color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissive: Option<String>,
    /// Emissive intensity.
    #[serde(default)]
    pub emissive_intensity: f64,
    /// Metalness.
    #[serde(default)]
    pub metalness: f64,
    /// Roughness.
    #[serde(default = "one")]
    pub roughness: f64,
    /// Light transmission (glass).
    #[serde(default)]
    pub transmission: f64,
    /// Refraction thickness.
    #[serde(default)]
    pub thickness: f64,
    /// Index of refraction.
    #[serde(default = "default_ior")]
    pub ior: f64,
    /// Opacity.
    #[serde(default = "one")]
    pub opacity: f64,
}

fn one() -> f64 {
    1.0
}

fn default_ior() -> f64 {
    1.5
}

/// Mesh geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    /// Icosahedron with `detail` subdivisions.
    Icosahedron {
        /// Circumradius.
        radius: f64,
        /// Subdivision level.
        detail: u32,
    },
}

/// Named mesh.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Mesh {
    /// Name used to address the mesh.
    pub name: String,
    /// Geometry.
    pub geometry: Geometry,
    /// Uniform local scale.
    pub scale: f64,
    /// Material.
    pub material: Material,
}

/// Transformed group of meshes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Group {
    /// Translation.
    pub position: Vec3,
    /// Uniform scale.
    pub scale: f64,
    /// Rotation around the vertical axis, radians.
    pub rotation_y: f64,
    /// Children.
    pub meshes: Vec<Mesh>,
}

/// Floating particle field.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sparkles {
    /// Particle count.
    pub count: u32,
    /// Extent of the field.
    pub scale: f64,
    /// Particle size.
    pub size: f64,
    /// Drift speed.
    pub speed: f64,
    /// Opacity.
    pub opacity: f64,
    /// Hex color.
    pub color: String,
}

/// Renderer-facing description of the decorative 3D scene.
///
/// The graph is built once; each frame only the centerpiece group and the inner core's glow
/// change, via [`SceneGraph::apply`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneGraph {
    /// Camera.
    pub camera: Camera,
    /// Lights.
    pub lights: Vec<Light>,
    /// The scroll-driven object.
    pub centerpiece: Group,
    /// Background particles.
    pub sparkles: Sparkles,
    /// Environment map preset.
    pub environment: String,
}

impl SceneGraph {
    /// The site's scene: a glass icosahedron around a glowing core.
    pub fn centerpiece(is_mobile: bool) -> Self {
        let pose = ParameterSet::default();
        Self {
            camera: Camera {
                position: Vec3::new(0.0, 0.0, 8.0),
                fov_deg: 35.0,
            },
            lights: vec![
                Light::Ambient { intensity: 0.4 },
                Light::Spot {
                    position: Vec3::splat(10.0),
                    angle: 0.15,
                    penumbra: 1.0,
                    intensity: 3.0,
                    color: GOLD.to_string(),
                },
                Light::Point {
                    position: Vec3::splat(-10.0),
                    intensity: 1.5,
                    color: WHITE.to_string(),
                },
            ],
            centerpiece: Group {
                position: pose.position,
                scale: pose.scale,
                rotation_y: pose.rotation_y,
                meshes: vec![
                    Mesh {
                        name: SHELL.to_string(),
                        geometry: Geometry::Icosahedron {
                            radius: 1.0,
                            detail: 0,
                        },
                        scale: 1.0,
                        material: Material {
                            color: GOLD.to_string(),
                            emissive: None,
                            emissive_intensity: 0.0,
                            metalness: 0.1,
                            roughness: 0.05,
                            transmission: 0.9,
                            thickness: 1.0,
                            ior: 1.5,
                            opacity: 0.8,
                        },
                    },
                    Mesh {
                        name: INNER_CORE.to_string(),
                        geometry: Geometry::Icosahedron {
                            radius: 1.0,
                            detail: 0,
                        },
                        scale: 0.3,
                        material: Material {
                            color: GOLD.to_string(),
                            emissive: Some(GOLD.to_string()),
                            emissive_intensity: pose.emissive_intensity,
                            metalness: 0.0,
                            roughness: 1.0,
                            transmission: 0.0,
                            thickness: 0.0,
                            ior: 1.5,
                            opacity: 1.0,
                        },
                    },
                ],
            },
            sparkles: Sparkles {
                count: if is_mobile { 30 } else { 80 },
                scale: 15.0,
                size: 2.0,
                speed: 0.4,
                opacity: 0.3,
                color: GOLD.to_string(),
            },
            environment: "night".to_string(),
        }
    }

    /// Push a pose into the graph.
    pub fn apply(&mut self, params: &ParameterSet) {
        let g = &mut self.centerpiece;
        g.position = params.position;
        g.scale = params.scale;
        g.rotation_y = params.rotation_y;
        if let Some(core) = g.meshes.iter_mut().find(|m| m.name == INNER_CORE) {
            core.material.emissive_intensity = params.emissive_intensity;
        }
    }

    /// Mesh by name.
    pub fn mesh(&self, name: &str) -> Option<&Mesh> {
        self.centerpiece.meshes.iter().find(|m| m.name == name)
    }
}
