//! First-person camera, perspective projection and the matrix uniform.
//!
//! The [`Camera`] keeps an eye position, a view direction and a fixed up vector.
//! Mouse motion turns the view direction (yaw around the up vector, then pitch
//! around the camera's right vector) and key presses translate the eye. The
//! [`Projection`] is recomputed from the window size and combined with the
//! camera and the model [`Transform`] into a [`MatrixUniform`] every frame.

use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, Rotation3, Vector2, Vector3};

use crate::data_structures::transform::Transform;

/// cgmath builds OpenGL projection matrices (clip depth in -1..1) while wgpu
/// expects clip depth in 0..1.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Mouse movement in pixels is scaled by this factor before it is turned into degrees.
pub const MOUSE_SENSITIVITY: f32 = 0.2;

/// A free-look camera.
///
/// The view direction is never re-normalized, so moving forward covers
/// `|view_direction| * speed` units. The up vector never changes.
#[derive(Clone, Debug)]
pub struct Camera {
    eye_position: Vector3<f32>,
    view_direction: Vector3<f32>,
    up_vector: Vector3<f32>,
    previous_mouse: Option<Vector2<f32>>,
}

impl Camera {
    pub fn new<E: Into<Vector3<f32>>, V: Into<Vector3<f32>>>(eye_position: E, view_direction: V) -> Self {
        Self {
            eye_position: eye_position.into(),
            view_direction: view_direction.into(),
            up_vector: Vector3::unit_y(),
            previous_mouse: None,
        }
    }

    pub fn eye_position(&self) -> Vector3<f32> {
        self.eye_position
    }

    pub fn view_direction(&self) -> Vector3<f32> {
        self.view_direction
    }

    pub fn up_vector(&self) -> Vector3<f32> {
        self.up_vector
    }

    /// Turn the camera towards the new cursor position.
    ///
    /// The first call only records the position. Every later call rotates by the
    /// delta to the previously recorded position: yaw around the up vector by
    /// `delta.x` degrees, then pitch around `view × up` by `delta.y` degrees.
    /// Pitch is not clamped, so the view can flip over.
    pub fn mouse_look(&mut self, mouse_x: f32, mouse_y: f32) {
        let current = Vector2::new(mouse_x, mouse_y);
        let previous = *self.previous_mouse.get_or_insert(current);
        let delta = (previous - current) * MOUSE_SENSITIVITY;

        self.view_direction = rotate(self.view_direction, self.up_vector, delta.x);
        let right = self.view_direction.cross(self.up_vector);
        // looking straight along the up vector leaves no axis to pitch around
        if right.magnitude2() > f32::EPSILON {
            self.view_direction = rotate(self.view_direction, right, delta.y);
        }

        self.previous_mouse = Some(current);
    }

    pub fn move_forward(&mut self, speed: f32) {
        self.eye_position += self.view_direction * speed;
    }

    pub fn move_backward(&mut self, speed: f32) {
        self.eye_position -= self.view_direction * speed;
    }

    pub fn move_left(&mut self, speed: f32) {
        self.eye_position -= self.horizontal_right() * speed;
    }

    pub fn move_right(&mut self, speed: f32) {
        self.eye_position += self.horizontal_right() * speed;
    }

    /// Vertical moves ignore the orientation entirely.
    pub fn move_up(&mut self, speed: f32) {
        self.eye_position.y += speed;
    }

    pub fn move_down(&mut self, speed: f32) {
        self.eye_position.y -= speed;
    }

    pub fn world_to_view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::from_vec(self.eye_position),
            Point3::from_vec(self.eye_position + self.view_direction),
            self.up_vector,
        )
    }

    // Right vector projected onto the ground plane; not normalized.
    fn horizontal_right(&self) -> Vector3<f32> {
        let right = self.view_direction.cross(self.up_vector);
        Vector3::new(right.x, 0.0, right.z)
    }
}

impl Default for Camera {
    fn default() -> Self {
        // Slightly off the origin, looking into the scene along -z.
        Self::new((2.0, 0.0, 0.0), (0.0, 0.0, -1.0))
    }
}

fn rotate(v: Vector3<f32>, axis: Vector3<f32>, degrees: f32) -> Vector3<f32> {
    cgmath::Quaternion::from_axis_angle(axis.normalize(), cgmath::Deg(degrees)) * v
}

/// Perspective projection that follows the window size.
#[derive(Clone, Debug)]
pub struct Projection {
    aspect: f32,
    fovy: cgmath::Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<cgmath::Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width.max(1) as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * cgmath::perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// Model, view and projection matrices as laid out in the vertex shader's
/// uniform block (three consecutive column-major `mat4`s).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MatrixUniform {
    model: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

impl MatrixUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        let identity: [[f32; 4]; 4] = Matrix4::<f32>::identity().into();
        Self {
            model: identity,
            view: identity,
            projection: identity,
        }
    }

    pub fn update(&mut self, transform: &Transform, camera: &Camera, projection: &Projection) {
        self.model = transform.matrix().into();
        self.view = camera.world_to_view_matrix().into();
        self.projection = projection.calc_matrix().into();
    }

    pub fn model(&self) -> Matrix4<f32> {
        self.model.into()
    }

    pub fn view(&self) -> Matrix4<f32> {
        self.view.into()
    }

    pub fn projection(&self) -> Matrix4<f32> {
        self.projection.into()
    }
}

impl Default for MatrixUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// GPU side of the [`MatrixUniform`]: buffer plus the bind group (group 0,
/// binding 0) that exposes it to the vertex shader.
#[derive(Debug)]
pub struct MatrixResources {
    pub uniform: MatrixUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl MatrixResources {
    pub fn new(device: &wgpu::Device, uniform: MatrixUniform) -> Self {
        use wgpu::util::DeviceExt;

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Matrix Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("matrix_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("matrix_bind_group"),
        });

        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    /// Recompute the matrices and queue the upload.
    pub fn write(
        &mut self,
        queue: &wgpu::Queue,
        transform: &Transform,
        camera: &Camera,
        projection: &Projection,
    ) {
        self.uniform.update(transform, camera, projection);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}
