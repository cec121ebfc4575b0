use crate::traits::Camera;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    pub view: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _pad1: f32,
    pub center: [f32; 3],
    pub _pad2: f32,
    pub up: [f32; 3],
    pub _pad3: f32,
    pub forward: [f32; 3],
    pub _pad4: f32,
    pub right: [f32; 3],
    pub ortho_factor: f32, // Orthographic half-extent hint
}

impl ViewUniform {
    /// Pack the current basis and look-at matrix of `camera`
    pub fn from_camera(camera: &dyn Camera, ortho_factor: f32) -> Self {
        let frame = camera.frame();
        let forward = frame.view_vector().unit();
        let right = forward.cross(&frame.up).unit();

        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            eye: frame.eye.to_array(),
            _pad1: 0.0,
            center: frame.center.to_array(),
            _pad2: 0.0,
            up: frame.up.to_array(),
            _pad3: 0.0,
            forward: forward.to_array(),
            _pad4: 0.0,
            right: right.to_array(),
            ortho_factor,
        }
    }
}
