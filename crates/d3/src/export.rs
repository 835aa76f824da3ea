//! Mesh export of scenes for GPU rendering and Wavefront OBJ files.

use crate::scene::{Cuboid, Scene, FACE_INDICES};
use std::fmt;
use std::io;

/// Mesh buffers suitable for GPU rendering.
///
/// Contains vertex positions and triangle indices in formats
/// compatible with WebGL/WebGPU.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    /// Uses `f32` for GPU compatibility.
    pub vertices: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty mesh buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends one cuboid: 8 vertices and 12 triangles.
    pub fn push_cuboid(&mut self, cuboid: &Cuboid) {
        let base = self.vertex_count() as u32;

        for v in cuboid.vertices() {
            self.vertices.push(v.x as f32);
            self.vertices.push(v.y as f32);
            self.vertices.push(v.z as f32);
        }

        // Each quad splits into (a, b, c) and (a, c, d).
        for [a, b, c, d] in FACE_INDICES {
            let [a, b, c, d] = [a, b, c, d].map(|i| base + i as u32);
            self.indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }
}

impl Scene {
    /// Exports the scene to GPU-friendly mesh buffers.
    ///
    /// Units come first in grid order; the container is appended last when
    /// `include_container` is set.
    pub fn to_mesh_buffers(&self, include_container: bool) -> MeshBuffers {
        let mut buffers = MeshBuffers::new();

        for unit in self.units() {
            buffers.push_cuboid(&unit.cuboid);
        }
        if include_container {
            buffers.push_cuboid(self.container());
        }

        buffers
    }

    /// Wavefront OBJ view of the scene, rendered through `Display`.
    pub fn obj(&self) -> Obj<'_> {
        Obj(self)
    }

    /// Writes the scene as Wavefront OBJ text.
    pub fn write_obj<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self.obj())
    }

    /// Returns the scene as Wavefront OBJ text.
    pub fn to_obj_string(&self) -> String {
        self.obj().to_string()
    }
}

/// Wavefront OBJ text for a [`Scene`].
///
/// One object per cuboid (`container`, then `unit_i_j_k`), each with its
/// 8 vertices and 6 quad faces.
#[derive(Debug, Clone, Copy)]
pub struct Obj<'a>(&'a Scene);

impl fmt::Display for Obj<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scene = self.0;
        writeln!(f, "# kitpack scene: {} units", scene.unit_count())?;

        let mut next_index = 1usize;
        let objects = std::iter::once(("container".to_string(), scene.container())).chain(
            scene.units().iter().map(|u| {
                let (i, j, k) = u.cell;
                (format!("unit_{}_{}_{}", i, j, k), &u.cuboid)
            }),
        );

        for (name, cuboid) in objects {
            writeln!(f, "o {}", name)?;
            for v in cuboid.vertices() {
                writeln!(f, "v {} {} {}", v.x, v.y, v.z)?;
            }
            for quad in FACE_INDICES {
                let [a, b, c, d] = quad.map(|i| next_index + i);
                writeln!(f, "f {} {} {} {}", a, b, c, d)?;
            }
            next_index += 8;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::build_scene;
    use kitpack_core::geometry::{Dimensions3D, GridCount};

    fn scene() -> Scene {
        build_scene(
            Dimensions3D::new(10.0, 10.0, 10.0),
            Dimensions3D::new(30.0, 30.0, 30.0),
            GridCount::new(2, 3, 1),
        )
    }

    #[test]
    fn test_mesh_buffers_creation() {
        let buffers = MeshBuffers::new();
        assert_eq!(buffers.vertex_count(), 0);
        assert_eq!(buffers.triangle_count(), 0);
    }

    #[test]
    fn test_scene_mesh_buffers() {
        let scene = scene();

        let units_only = scene.to_mesh_buffers(false);
        assert_eq!(units_only.vertex_count(), 6 * 8);
        assert_eq!(units_only.triangle_count(), 6 * 12);

        let with_container = scene.to_mesh_buffers(true);
        assert_eq!(with_container.vertex_count(), 7 * 8);
        assert!(with_container
            .indices
            .iter()
            .all(|&i| (i as usize) < with_container.vertex_count()));
    }

    #[test]
    fn test_obj_export() {
        let obj = scene().to_obj_string();

        let vertex_lines = obj.lines().filter(|l| l.starts_with("v ")).count();
        let face_lines = obj.lines().filter(|l| l.starts_with("f ")).count();
        assert_eq!(vertex_lines, 8 * 7);
        assert_eq!(face_lines, 6 * 7);

        assert!(obj.contains("o container"));
        assert!(obj.contains("o unit_1_2_0"));
        assert!(obj.contains("f 1 2 3 4"));
        // Last object's last face references the final vertex block.
        assert!(obj.contains("f 53 56 52 49"));
    }

    struct FullDisk;

    impl io::Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_obj_writer_errors_propagate() {
        let scene = scene();

        let mut buf = Vec::new();
        scene.write_obj(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), scene.to_obj_string());

        let err = scene.write_obj(FullDisk).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
