use std::error::Error;
use std::fmt;
use std::mem::offset_of;

use crate::core::shader::uniforms::FrameUniforms;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformKind {
    Float,
    Vec2,
    Int,
}

impl UniformKind {
    #[must_use]
    pub const fn wgsl_type(self) -> &'static str {
        match self {
            Self::Float => "f32",
            Self::Vec2 => "vec2<f32>",
            Self::Int => "i32",
        }
    }

    /// Size in bytes inside a uniform block.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Float | Self::Int => 4,
            Self::Vec2 => 8,
        }
    }

    #[must_use]
    pub const fn alignment(self) -> usize {
        self.size()
    }
}

/// One named member of the program's uniform block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformField {
    pub name: &'static str,
    pub kind: UniformKind,
    /// Byte offset inside the uniform block.
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderProgramError {
    MissingEntryPoint { entry_point: &'static str },
    MissingUniform { name: &'static str, wgsl_type: &'static str },
    /// Misaligned, overlapping the previous field, or past the block end.
    MisplacedUniform { name: &'static str, offset: usize },
    UniformBlockSize { declared: usize, uploaded: usize },
}

impl fmt::Display for ShaderProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEntryPoint { entry_point } => {
                write!(f, "shader source has no entry point `{}`", entry_point)
            }
            Self::MissingUniform { name, wgsl_type } => {
                write!(f, "shader source does not declare uniform `{}: {}`", name, wgsl_type)
            }
            Self::MisplacedUniform { name, offset } => {
                write!(f, "uniform `{}` cannot sit at byte offset {}", name, offset)
            }
            Self::UniformBlockSize { declared, uploaded } => {
                write!(
                    f,
                    "uniform block is declared as {} bytes but the host uploads {}",
                    declared, uploaded
                )
            }
        }
    }
}

impl Error for ShaderProgramError {}

/// A GPU program described as data: the stage source plus the uniforms the
/// host must supply every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderProgram {
    pub label: &'static str,
    pub source: &'static str,
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
    pub uniforms: &'static [UniformField],
    pub uniform_block_size: usize,
}

pub const MANDELBROT_PROGRAM: ShaderProgram = ShaderProgram {
    label: "mandelbrot",
    source: include_str!("mandelbrot.wgsl"),
    vertex_entry: "vs_main",
    fragment_entry: "fs_main",
    uniforms: &[
        UniformField {
            name: "center",
            kind: UniformKind::Vec2,
            offset: offset_of!(FrameUniforms, center),
        },
        UniformField {
            name: "zoom",
            kind: UniformKind::Float,
            offset: offset_of!(FrameUniforms, zoom),
        },
        UniformField {
            name: "plane_width",
            kind: UniformKind::Float,
            offset: offset_of!(FrameUniforms, plane_width),
        },
        UniformField {
            name: "plane_height",
            kind: UniformKind::Float,
            offset: offset_of!(FrameUniforms, plane_height),
        },
        UniformField {
            name: "max_iter",
            kind: UniformKind::Int,
            offset: offset_of!(FrameUniforms, max_iter),
        },
    ],
    uniform_block_size: size_of::<FrameUniforms>(),
};

impl ShaderProgram {
    /// Checks that the source declares every entry point and uniform the
    /// description promises. A mismatch is a build-time mistake, so the host
    /// refuses to start on it.
    pub fn validate(&self) -> Result<(), ShaderProgramError> {
        for entry_point in [self.vertex_entry, self.fragment_entry] {
            if !self.source.contains(&format!("fn {}(", entry_point)) {
                return Err(ShaderProgramError::MissingEntryPoint { entry_point });
            }
        }

        for field in self.uniforms {
            let declaration = format!("{}: {},", field.name, field.kind.wgsl_type());

            if !self.source.contains(&declaration) {
                return Err(ShaderProgramError::MissingUniform {
                    name: field.name,
                    wgsl_type: field.kind.wgsl_type(),
                });
            }
        }

        self.validate_layout()
    }

    /// Fields must be listed in offset order, aligned to their kind and
    /// contained in the block.
    fn validate_layout(&self) -> Result<(), ShaderProgramError> {
        let mut next_free = 0;

        for field in self.uniforms {
            let end = field.offset + field.kind.size();

            if field.offset % field.kind.alignment() != 0
                || field.offset < next_free
                || end > self.uniform_block_size
            {
                return Err(ShaderProgramError::MisplacedUniform {
                    name: field.name,
                    offset: field.offset,
                });
            }

            next_free = end;
        }

        Ok(())
    }

    /// Checks the block the host writes each frame against the declared size.
    pub fn check_upload_size(&self, uploaded: usize) -> Result<(), ShaderProgramError> {
        if uploaded != self.uniform_block_size {
            return Err(ShaderProgramError::UniformBlockSize {
                declared: self.uniform_block_size,
                uploaded,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use naga::valid::{Capabilities, ValidationFlags, Validator};

    fn compile(source: &str) -> Result<naga::Module, String> {
        let module = naga::front::wgsl::parse_str(source).map_err(|err| err.emit_to_string(source))?;

        Validator::new(ValidationFlags::all(), Capabilities::empty())
            .validate(&module)
            .map_err(|err| format!("{:?}", err))?;

        Ok(module)
    }

    #[test]
    fn wgsl_source_compiles() {
        let module = compile(MANDELBROT_PROGRAM.source).unwrap();

        let entry_points: Vec<_> = module
            .entry_points
            .iter()
            .map(|entry| (entry.name.as_str(), entry.stage))
            .collect();

        assert_eq!(
            entry_points,
            [
                (MANDELBROT_PROGRAM.vertex_entry, naga::ShaderStage::Vertex),
                (MANDELBROT_PROGRAM.fragment_entry, naga::ShaderStage::Fragment),
            ]
        );
    }

    #[test]
    fn wgsl_uniform_block_matches_schema() {
        let module = compile(MANDELBROT_PROGRAM.source).unwrap();

        let (_, frame) = module
            .global_variables
            .iter()
            .find(|(_, var)| var.name.as_deref() == Some("frame"))
            .unwrap();

        assert_eq!(frame.space, naga::AddressSpace::Uniform);
        assert_eq!(
            frame.binding,
            Some(naga::ResourceBinding {
                group: 0,
                binding: 0
            })
        );

        let naga::TypeInner::Struct { members, span } = &module.types[frame.ty].inner else {
            panic!("`frame` is not a struct");
        };

        assert_eq!(*span as usize, MANDELBROT_PROGRAM.uniform_block_size);

        for field in MANDELBROT_PROGRAM.uniforms {
            let member = members
                .iter()
                .find(|member| member.name.as_deref() == Some(field.name))
                .unwrap();

            assert_eq!(member.offset as usize, field.offset, "offset of `{}`", field.name);
        }
    }

    #[test]
    fn broken_escape_loop_fails_to_compile() {
        let source = MANDELBROT_PROGRAM.source.replace("length(z)", "lenght(z)");

        assert_ne!(source, MANDELBROT_PROGRAM.source);
        assert!(compile(&source).is_err());
    }

    #[test]
    fn palette_type_error_fails_to_compile() {
        let source = MANDELBROT_PROGRAM.source.replace(
            "return vec4<f32>(5.0 * fraction, 2.0 * fraction, 8.0 * fraction, 1.0);",
            "return vec3<f32>(5.0 * fraction, 2.0 * fraction, 8.0 * fraction);",
        );

        assert_ne!(source, MANDELBROT_PROGRAM.source);
        assert!(compile(&source).is_err());
    }

    #[test]
    fn mandelbrot_program_is_consistent() {
        assert_eq!(MANDELBROT_PROGRAM.validate(), Ok(()));
    }

    #[test]
    fn schema_names_the_frame_parameters() {
        let names: Vec<_> = MANDELBROT_PROGRAM.uniforms.iter().map(|u| u.name).collect();

        assert_eq!(names, ["center", "zoom", "plane_width", "plane_height", "max_iter"]);
    }

    #[test]
    fn schema_offsets_match_wgsl_layout() {
        let offsets: Vec<_> = MANDELBROT_PROGRAM.uniforms.iter().map(|u| u.offset).collect();

        assert_eq!(offsets, [0, 8, 12, 16, 20]);
        assert_eq!(MANDELBROT_PROGRAM.uniform_block_size, 32);
    }

    #[test]
    fn missing_uniform_is_reported() {
        let program = ShaderProgram {
            source: "fn vs_main() {} fn fs_main() {} struct U { zoom: f32, };",
            ..MANDELBROT_PROGRAM
        };

        assert_eq!(
            program.validate(),
            Err(ShaderProgramError::MissingUniform {
                name: "center",
                wgsl_type: "vec2<f32>"
            })
        );
    }

    #[test]
    fn missing_entry_point_is_reported() {
        let program = ShaderProgram {
            fragment_entry: "main_image",
            ..MANDELBROT_PROGRAM
        };

        assert_eq!(
            program.validate(),
            Err(ShaderProgramError::MissingEntryPoint {
                entry_point: "main_image"
            })
        );
    }

    #[test]
    fn frame_uniforms_fill_the_declared_block() {
        assert_eq!(
            MANDELBROT_PROGRAM.check_upload_size(size_of::<FrameUniforms>()),
            Ok(())
        );
        assert_eq!(
            MANDELBROT_PROGRAM.check_upload_size(24),
            Err(ShaderProgramError::UniformBlockSize {
                declared: 32,
                uploaded: 24
            })
        );
    }

    #[test]
    fn misaligned_uniform_is_reported() {
        let program = ShaderProgram {
            uniforms: &[UniformField {
                name: "center",
                kind: UniformKind::Vec2,
                offset: 4,
            }],
            ..MANDELBROT_PROGRAM
        };

        assert_eq!(
            program.validate(),
            Err(ShaderProgramError::MisplacedUniform {
                name: "center",
                offset: 4
            })
        );
    }

    #[test]
    fn overlapping_uniforms_are_reported() {
        let program = ShaderProgram {
            uniforms: &[
                UniformField {
                    name: "center",
                    kind: UniformKind::Vec2,
                    offset: 0,
                },
                UniformField {
                    name: "zoom",
                    kind: UniformKind::Float,
                    offset: 4,
                },
            ],
            ..MANDELBROT_PROGRAM
        };

        assert_eq!(
            program.validate(),
            Err(ShaderProgramError::MisplacedUniform {
                name: "zoom",
                offset: 4
            })
        );
    }

    #[test]
    fn uniform_past_block_end_is_reported() {
        let program = ShaderProgram {
            uniform_block_size: 16,
            ..MANDELBROT_PROGRAM
        };

        assert_eq!(
            program.validate(),
            Err(ShaderProgramError::MisplacedUniform {
                name: "plane_height",
                offset: 16
            })
        );
    }
}
