//! Typed replacements for raw GL tokens.
//!
//! Every enum here is `#[repr(u32)]` with its GL constant as discriminant, so
//! translating to the native token is a cast. Translating back goes through
//! [`num_traits::FromPrimitive`] and fails for tokens outside the group.

use std::ops::{BitOr, BitOrAssign};

use gl::types::{GLbitfield, GLenum};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::consts as c;
use crate::error::Error;

/// A group of GL tokens expressed as a Rust enum.
pub trait GlEnum: Copy + FromPrimitive {
    /// Name of the group, used in error messages.
    const NAME: &'static str;

    /// The native token for this value.
    fn to_gl(self) -> GLenum;

    /// Look up the value for a native token.
    fn from_gl(value: GLenum) -> Option<Self> {
        Self::from_u32(value)
    }

    /// Like [`GlEnum::from_gl`], but reports the unknown token.
    fn try_from_gl(value: GLenum) -> Result<Self, Error> {
        Self::from_gl(value).ok_or(Error::UnknownConstant {
            kind: Self::NAME,
            value,
        })
    }
}

macro_rules! gl_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromPrimitive)]
        #[repr(u32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl GlEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn to_gl(self) -> GLenum {
                self as GLenum
            }
        }
    };
}

// =====================================================================
// Global state
// =====================================================================

gl_enum! {
    /// Server-side capabilities toggled with `glEnable`/`glDisable`.
    pub enum Capability {
        Blend = c::BLEND,
        CullFace = c::CULL_FACE,
        DepthTest = c::DEPTH_TEST,
        Dither = c::DITHER,
        PolygonOffsetFill = c::POLYGON_OFFSET_FILL,
        SampleAlphaToCoverage = c::SAMPLE_ALPHA_TO_COVERAGE,
        SampleCoverage = c::SAMPLE_COVERAGE,
        ScissorTest = c::SCISSOR_TEST,
        StencilTest = c::STENCIL_TEST,
    }
}

gl_enum! {
    /// Error flags reported by `glGetError`. `GL_NO_ERROR` has no variant.
    pub enum ErrorCode {
        InvalidEnum = c::INVALID_ENUM,
        InvalidValue = c::INVALID_VALUE,
        InvalidOperation = c::INVALID_OPERATION,
        InvalidFramebufferOperation = c::INVALID_FRAMEBUFFER_OPERATION,
        OutOfMemory = c::OUT_OF_MEMORY,
    }
}

gl_enum! {
    pub enum StringName {
        Vendor = c::VENDOR,
        Renderer = c::RENDERER,
        Version = c::VERSION,
        ShadingLanguageVersion = c::SHADING_LANGUAGE_VERSION,
        Extensions = c::EXTENSIONS,
    }
}

gl_enum! {
    pub enum HintTarget {
        GenerateMipmap = c::GENERATE_MIPMAP_HINT,
    }
}

gl_enum! {
    pub enum HintMode {
        DontCare = c::DONT_CARE,
        Fastest = c::FASTEST,
        Nicest = c::NICEST,
    }
}

// =====================================================================
// Buffers
// =====================================================================

gl_enum! {
    pub enum BufferTarget {
        Array = c::ARRAY_BUFFER,
        ElementArray = c::ELEMENT_ARRAY_BUFFER,
    }
}

impl BufferTarget {
    /// The `glGetIntegerv` name reporting the buffer bound to this target.
    pub fn binding(self) -> GLenum {
        match self {
            BufferTarget::Array => c::ARRAY_BUFFER_BINDING,
            BufferTarget::ElementArray => c::ELEMENT_ARRAY_BUFFER_BINDING,
        }
    }
}

gl_enum! {
    pub enum BufferUsage {
        StreamDraw = c::STREAM_DRAW,
        StaticDraw = c::STATIC_DRAW,
        DynamicDraw = c::DYNAMIC_DRAW,
    }
}

gl_enum! {
    pub enum BufferParameter {
        Size = c::BUFFER_SIZE,
        Usage = c::BUFFER_USAGE,
    }
}

// =====================================================================
// Textures
// =====================================================================

gl_enum! {
    /// Binding points accepted by `glBindTexture`.
    pub enum TextureTarget {
        Texture2D = c::TEXTURE_2D,
        CubeMap = c::TEXTURE_CUBE_MAP,
    }
}

impl TextureTarget {
    /// The `glGetIntegerv` name reporting the texture bound to this target on
    /// the active unit.
    pub fn binding(self) -> GLenum {
        match self {
            TextureTarget::Texture2D => c::TEXTURE_BINDING_2D,
            TextureTarget::CubeMap => c::TEXTURE_BINDING_CUBE_MAP,
        }
    }
}

gl_enum! {
    /// Image targets accepted by `glTexImage2D` and friends: the 2D target or
    /// one face of a cube map.
    pub enum TextureImageTarget {
        Texture2D = c::TEXTURE_2D,
        CubeMapPositiveX = c::TEXTURE_CUBE_MAP_POSITIVE_X,
        CubeMapNegativeX = c::TEXTURE_CUBE_MAP_NEGATIVE_X,
        CubeMapPositiveY = c::TEXTURE_CUBE_MAP_POSITIVE_Y,
        CubeMapNegativeY = c::TEXTURE_CUBE_MAP_NEGATIVE_Y,
        CubeMapPositiveZ = c::TEXTURE_CUBE_MAP_POSITIVE_Z,
        CubeMapNegativeZ = c::TEXTURE_CUBE_MAP_NEGATIVE_Z,
    }
}

impl TextureImageTarget {
    pub const CUBE_MAP_FACES: [TextureImageTarget; 6] = [
        TextureImageTarget::CubeMapPositiveX,
        TextureImageTarget::CubeMapNegativeX,
        TextureImageTarget::CubeMapPositiveY,
        TextureImageTarget::CubeMapNegativeY,
        TextureImageTarget::CubeMapPositiveZ,
        TextureImageTarget::CubeMapNegativeZ,
    ];

    /// The texture binding point an image target belongs to.
    pub fn texture_target(self) -> TextureTarget {
        match self {
            TextureImageTarget::Texture2D => TextureTarget::Texture2D,
            _ => TextureTarget::CubeMap,
        }
    }
}

gl_enum! {
    pub enum TextureMinFilter {
        Nearest = c::NEAREST,
        Linear = c::LINEAR,
        NearestMipmapNearest = c::NEAREST_MIPMAP_NEAREST,
        LinearMipmapNearest = c::LINEAR_MIPMAP_NEAREST,
        NearestMipmapLinear = c::NEAREST_MIPMAP_LINEAR,
        LinearMipmapLinear = c::LINEAR_MIPMAP_LINEAR,
    }
}

gl_enum! {
    pub enum TextureMagFilter {
        Nearest = c::NEAREST,
        Linear = c::LINEAR,
    }
}

gl_enum! {
    pub enum TextureWrap {
        Repeat = c::REPEAT,
        ClampToEdge = c::CLAMP_TO_EDGE,
        MirroredRepeat = c::MIRRORED_REPEAT,
    }
}

gl_enum! {
    pub enum TextureParameter {
        MinFilter = c::TEXTURE_MIN_FILTER,
        MagFilter = c::TEXTURE_MAG_FILTER,
        WrapS = c::TEXTURE_WRAP_S,
        WrapT = c::TEXTURE_WRAP_T,
    }
}

/// A texture image unit, `GL_TEXTURE0 + index`.
///
/// Indices past the implementation's unit count are passed through; the
/// driver rejects them with `INVALID_ENUM`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureUnit(pub u32);

impl TextureUnit {
    pub fn to_gl(self) -> GLenum {
        c::TEXTURE0.wrapping_add(self.0)
    }

    /// Only the tokens `TEXTURE0..=TEXTURE31` name a unit.
    pub fn from_gl(value: GLenum) -> Option<Self> {
        (c::TEXTURE0..=c::TEXTURE31)
            .contains(&value)
            .then(|| TextureUnit(value - c::TEXTURE0))
    }
}

// =====================================================================
// Pixels
// =====================================================================

gl_enum! {
    /// Pixel formats. In ES 2.0 the internal format of a texture must equal
    /// its upload format, so this one enum serves both.
    pub enum PixelFormat {
        Alpha = c::ALPHA,
        Rgb = c::RGB,
        Rgba = c::RGBA,
        Luminance = c::LUMINANCE,
        LuminanceAlpha = c::LUMINANCE_ALPHA,
    }
}

gl_enum! {
    pub enum PixelType {
        UnsignedByte = c::UNSIGNED_BYTE,
        UnsignedShort565 = c::UNSIGNED_SHORT_5_6_5,
        UnsignedShort4444 = c::UNSIGNED_SHORT_4_4_4_4,
        UnsignedShort5551 = c::UNSIGNED_SHORT_5_5_5_1,
    }
}

impl PixelType {
    /// Bytes per pixel for this type combined with `format`.
    pub fn bytes_per_pixel(self, format: PixelFormat) -> usize {
        match self {
            PixelType::UnsignedByte => match format {
                PixelFormat::Alpha | PixelFormat::Luminance => 1,
                PixelFormat::LuminanceAlpha => 2,
                PixelFormat::Rgb => 3,
                PixelFormat::Rgba => 4,
            },
            _ => 2,
        }
    }
}

gl_enum! {
    pub enum PixelStoreParameter {
        PackAlignment = c::PACK_ALIGNMENT,
        UnpackAlignment = c::UNPACK_ALIGNMENT,
    }
}

gl_enum! {
    /// Row alignment for pixel pack/unpack, in bytes.
    pub enum Alignment {
        One = 1,
        Two = 2,
        Four = 4,
        Eight = 8,
    }
}

/// Buffers cleared by `glClear`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ClearMask(GLbitfield);

impl ClearMask {
    pub const COLOR: ClearMask = ClearMask(c::COLOR_BUFFER_BIT);
    pub const DEPTH: ClearMask = ClearMask(c::DEPTH_BUFFER_BIT);
    pub const STENCIL: ClearMask = ClearMask(c::STENCIL_BUFFER_BIT);
    pub const ALL: ClearMask =
        ClearMask(c::COLOR_BUFFER_BIT | c::DEPTH_BUFFER_BIT | c::STENCIL_BUFFER_BIT);

    pub fn bits(self) -> GLbitfield {
        self.0
    }

    pub fn contains(self, other: ClearMask) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ClearMask {
    type Output = ClearMask;

    fn bitor(self, rhs: ClearMask) -> ClearMask {
        ClearMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for ClearMask {
    fn bitor_assign(&mut self, rhs: ClearMask) {
        self.0 |= rhs.0;
    }
}

// =====================================================================
// Framebuffers and renderbuffers
// =====================================================================

gl_enum! {
    pub enum FramebufferTarget {
        Framebuffer = c::FRAMEBUFFER,
    }
}

gl_enum! {
    pub enum Attachment {
        Color0 = c::COLOR_ATTACHMENT0,
        Depth = c::DEPTH_ATTACHMENT,
        Stencil = c::STENCIL_ATTACHMENT,
    }
}

gl_enum! {
    pub enum FramebufferStatus {
        Complete = c::FRAMEBUFFER_COMPLETE,
        IncompleteAttachment = c::FRAMEBUFFER_INCOMPLETE_ATTACHMENT,
        IncompleteMissingAttachment = c::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT,
        IncompleteDimensions = c::FRAMEBUFFER_INCOMPLETE_DIMENSIONS,
        Unsupported = c::FRAMEBUFFER_UNSUPPORTED,
    }
}

gl_enum! {
    pub enum AttachmentObjectType {
        None = c::NONE,
        Texture = c::TEXTURE,
        Renderbuffer = c::RENDERBUFFER,
    }
}

gl_enum! {
    pub enum RenderbufferTarget {
        Renderbuffer = c::RENDERBUFFER,
    }
}

gl_enum! {
    pub enum RenderbufferFormat {
        Rgba4 = c::RGBA4,
        Rgb565 = c::RGB565,
        Rgb5A1 = c::RGB5_A1,
        DepthComponent16 = c::DEPTH_COMPONENT16,
        StencilIndex8 = c::STENCIL_INDEX8,
    }
}

// =====================================================================
// Shaders and programs
// =====================================================================

gl_enum! {
    pub enum ShaderType {
        Vertex = c::VERTEX_SHADER,
        Fragment = c::FRAGMENT_SHADER,
    }
}

gl_enum! {
    pub enum PrecisionType {
        LowFloat = c::LOW_FLOAT,
        MediumFloat = c::MEDIUM_FLOAT,
        HighFloat = c::HIGH_FLOAT,
        LowInt = c::LOW_INT,
        MediumInt = c::MEDIUM_INT,
        HighInt = c::HIGH_INT,
    }
}

gl_enum! {
    /// Types of active attributes and uniforms.
    pub enum VariableType {
        Float = c::FLOAT,
        FloatVec2 = c::FLOAT_VEC2,
        FloatVec3 = c::FLOAT_VEC3,
        FloatVec4 = c::FLOAT_VEC4,
        Int = c::INT,
        IntVec2 = c::INT_VEC2,
        IntVec3 = c::INT_VEC3,
        IntVec4 = c::INT_VEC4,
        Bool = c::BOOL,
        BoolVec2 = c::BOOL_VEC2,
        BoolVec3 = c::BOOL_VEC3,
        BoolVec4 = c::BOOL_VEC4,
        FloatMat2 = c::FLOAT_MAT2,
        FloatMat3 = c::FLOAT_MAT3,
        FloatMat4 = c::FLOAT_MAT4,
        Sampler2D = c::SAMPLER_2D,
        SamplerCube = c::SAMPLER_CUBE,
    }
}

impl VariableType {
    /// Number of scalar components in one element of this type.
    pub fn components(self) -> usize {
        use VariableType::*;
        match self {
            Float | Int | Bool | Sampler2D | SamplerCube => 1,
            FloatVec2 | IntVec2 | BoolVec2 => 2,
            FloatVec3 | IntVec3 | BoolVec3 => 3,
            FloatVec4 | IntVec4 | BoolVec4 | FloatMat2 => 4,
            FloatMat3 => 9,
            FloatMat4 => 16,
        }
    }
}

// =====================================================================
// Rasterization and per-fragment operations
// =====================================================================

gl_enum! {
    pub enum Face {
        Front = c::FRONT,
        Back = c::BACK,
        FrontAndBack = c::FRONT_AND_BACK,
    }
}

gl_enum! {
    /// Winding order that marks a polygon as front-facing.
    pub enum FrontFace {
        Clockwise = c::CW,
        CounterClockwise = c::CCW,
    }
}

gl_enum! {
    /// Comparison used by the depth and stencil tests.
    pub enum CompareFunc {
        Never = c::NEVER,
        Less = c::LESS,
        Equal = c::EQUAL,
        LessEqual = c::LEQUAL,
        Greater = c::GREATER,
        NotEqual = c::NOTEQUAL,
        GreaterEqual = c::GEQUAL,
        Always = c::ALWAYS,
    }
}

gl_enum! {
    pub enum BlendFactor {
        Zero = c::ZERO,
        One = c::ONE,
        SrcColor = c::SRC_COLOR,
        OneMinusSrcColor = c::ONE_MINUS_SRC_COLOR,
        DstColor = c::DST_COLOR,
        OneMinusDstColor = c::ONE_MINUS_DST_COLOR,
        SrcAlpha = c::SRC_ALPHA,
        OneMinusSrcAlpha = c::ONE_MINUS_SRC_ALPHA,
        DstAlpha = c::DST_ALPHA,
        OneMinusDstAlpha = c::ONE_MINUS_DST_ALPHA,
        ConstantColor = c::CONSTANT_COLOR,
        OneMinusConstantColor = c::ONE_MINUS_CONSTANT_COLOR,
        ConstantAlpha = c::CONSTANT_ALPHA,
        OneMinusConstantAlpha = c::ONE_MINUS_CONSTANT_ALPHA,
        SrcAlphaSaturate = c::SRC_ALPHA_SATURATE,
    }
}

gl_enum! {
    pub enum BlendEquation {
        Add = c::FUNC_ADD,
        Subtract = c::FUNC_SUBTRACT,
        ReverseSubtract = c::FUNC_REVERSE_SUBTRACT,
    }
}

gl_enum! {
    pub enum StencilOp {
        Keep = c::KEEP,
        Zero = c::ZERO,
        Replace = c::REPLACE,
        Incr = c::INCR,
        Decr = c::DECR,
        Invert = c::INVERT,
        IncrWrap = c::INCR_WRAP,
        DecrWrap = c::DECR_WRAP,
    }
}

// =====================================================================
// Vertex specification and drawing
// =====================================================================

gl_enum! {
    pub enum DrawMode {
        Points = c::POINTS,
        Lines = c::LINES,
        LineLoop = c::LINE_LOOP,
        LineStrip = c::LINE_STRIP,
        Triangles = c::TRIANGLES,
        TriangleStrip = c::TRIANGLE_STRIP,
        TriangleFan = c::TRIANGLE_FAN,
    }
}

gl_enum! {
    pub enum IndexType {
        UnsignedByte = c::UNSIGNED_BYTE,
        UnsignedShort = c::UNSIGNED_SHORT,
    }
}

gl_enum! {
    pub enum VertexAttribType {
        Byte = c::BYTE,
        UnsignedByte = c::UNSIGNED_BYTE,
        Short = c::SHORT,
        UnsignedShort = c::UNSIGNED_SHORT,
        Fixed = c::FIXED,
        Float = c::FLOAT,
    }
}

impl VertexAttribType {
    pub fn size_in_bytes(self) -> usize {
        match self {
            VertexAttribType::Byte | VertexAttribType::UnsignedByte => 1,
            VertexAttribType::Short | VertexAttribType::UnsignedShort => 2,
            VertexAttribType::Fixed | VertexAttribType::Float => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trip<T: GlEnum + PartialEq + std::fmt::Debug>(all: &[T]) {
        for &value in all {
            assert_eq!(T::from_gl(value.to_gl()), Some(value), "{}", T::NAME);
        }
    }

    #[test]
    fn every_enum_round_trips_through_its_native_token() {
        assert_round_trip(Capability::ALL);
        assert_round_trip(ErrorCode::ALL);
        assert_round_trip(StringName::ALL);
        assert_round_trip(HintTarget::ALL);
        assert_round_trip(HintMode::ALL);
        assert_round_trip(BufferTarget::ALL);
        assert_round_trip(BufferUsage::ALL);
        assert_round_trip(BufferParameter::ALL);
        assert_round_trip(TextureTarget::ALL);
        assert_round_trip(TextureImageTarget::ALL);
        assert_round_trip(TextureMinFilter::ALL);
        assert_round_trip(TextureMagFilter::ALL);
        assert_round_trip(TextureWrap::ALL);
        assert_round_trip(TextureParameter::ALL);
        assert_round_trip(PixelFormat::ALL);
        assert_round_trip(PixelType::ALL);
        assert_round_trip(PixelStoreParameter::ALL);
        assert_round_trip(Alignment::ALL);
        assert_round_trip(FramebufferTarget::ALL);
        assert_round_trip(Attachment::ALL);
        assert_round_trip(FramebufferStatus::ALL);
        assert_round_trip(AttachmentObjectType::ALL);
        assert_round_trip(RenderbufferTarget::ALL);
        assert_round_trip(RenderbufferFormat::ALL);
        assert_round_trip(ShaderType::ALL);
        assert_round_trip(PrecisionType::ALL);
        assert_round_trip(VariableType::ALL);
        assert_round_trip(Face::ALL);
        assert_round_trip(FrontFace::ALL);
        assert_round_trip(CompareFunc::ALL);
        assert_round_trip(BlendFactor::ALL);
        assert_round_trip(BlendEquation::ALL);
        assert_round_trip(StencilOp::ALL);
        assert_round_trip(DrawMode::ALL);
        assert_round_trip(IndexType::ALL);
        assert_round_trip(VertexAttribType::ALL);
    }

    #[test]
    fn clockwise_winding_matches_gl_cw() {
        assert_eq!(FrontFace::Clockwise.to_gl(), 0x0900);
        assert_eq!(FrontFace::from_gl(0x0900), Some(FrontFace::Clockwise));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(FrontFace::from_gl(c::TEXTURE_2D), None);
        assert_eq!(ErrorCode::from_gl(c::NO_ERROR), None);

        let err = BlendEquation::try_from_gl(0xdead).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownConstant {
                kind: "BlendEquation",
                value: 0xdead
            }
        ));
    }

    #[test]
    fn texture_units_offset_from_texture0() {
        assert_eq!(TextureUnit(0).to_gl(), c::TEXTURE0);
        assert_eq!(TextureUnit(31).to_gl(), c::TEXTURE31);
        assert_eq!(TextureUnit::from_gl(c::TEXTURE0 + 5), Some(TextureUnit(5)));
        assert_eq!(TextureUnit::from_gl(c::TEXTURE_2D), None);
    }

    #[test]
    fn texture_units_outside_the_token_range() {
        assert_eq!(TextureUnit(u32::MAX).to_gl(), c::TEXTURE0 - 1);
        assert_eq!(TextureUnit::from_gl(c::TEXTURE31 + 1), None);
        assert_eq!(TextureUnit::from_gl(u32::MAX), None);
        for index in 0..32 {
            let unit = TextureUnit(index);
            assert_eq!(TextureUnit::from_gl(unit.to_gl()), Some(unit));
        }
    }

    #[test]
    fn clear_mask_combines_bits() {
        let mask = ClearMask::COLOR | ClearMask::DEPTH;
        assert_eq!(mask.bits(), c::COLOR_BUFFER_BIT | c::DEPTH_BUFFER_BIT);
        assert!(mask.contains(ClearMask::DEPTH));
        assert!(!mask.contains(ClearMask::STENCIL));
        assert!(ClearMask::ALL.contains(mask));
    }

    #[test]
    fn cube_faces_belong_to_the_cube_map_target() {
        for face in TextureImageTarget::CUBE_MAP_FACES {
            assert_eq!(face.texture_target(), TextureTarget::CubeMap);
        }
        assert_eq!(
            TextureImageTarget::Texture2D.texture_target(),
            TextureTarget::Texture2D
        );
    }
}
