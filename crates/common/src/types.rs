use glam::IVec3;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Integer block position in a voxel world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos(pub IVec3);

/// Lexicographic by x, then y, then z.
impl Ord for BlockPos {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.to_array().cmp(&other.0.to_array())
    }
}

impl PartialOrd for BlockPos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl BlockPos {
    pub const ORIGIN: BlockPos = BlockPos(IVec3::ZERO);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(IVec3::new(x, y, z))
    }

    pub fn x(self) -> i32 {
        self.0.x
    }

    pub fn y(self) -> i32 {
        self.0.y
    }

    pub fn z(self) -> i32 {
        self.0.z
    }

    /// Position offset by the given deltas.
    pub fn relative(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self(self.0 + IVec3::new(dx, dy, dz))
    }

    /// Position `distance` steps away in the direction of `face`.
    pub fn step(self, face: BlockFace, distance: i32) -> Self {
        Self(self.0 + face.normal() * distance)
    }

    /// Chebyshev distance: the largest per-axis offset.
    pub fn chebyshev(self, other: BlockPos) -> i32 {
        (self.0 - other.0).abs().max_element()
    }
}

impl std::fmt::Display for BlockPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

/// Families of blocks an absorber can neutralize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FluidFamily {
    Water,
    Lava,
    Fire,
}

/// Block material. Flowing and stationary fluids are distinct materials
/// sharing a [`FluidFamily`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    #[default]
    Air,
    Water,
    StationaryWater,
    Lava,
    StationaryLava,
    Fire,
    Sponge,
    Stone,
    Sand,
    Planks,
    /// Any material the engine does not interpret.
    Other(u16),
}

impl Material {
    pub fn family(self) -> Option<FluidFamily> {
        match self {
            Self::Water | Self::StationaryWater => Some(FluidFamily::Water),
            Self::Lava | Self::StationaryLava => Some(FluidFamily::Lava),
            Self::Fire => Some(FluidFamily::Fire),
            _ => None,
        }
    }

    /// The absorber block.
    pub fn is_sponge(self) -> bool {
        self == Self::Sponge
    }

    pub fn is_air(self) -> bool {
        self == Self::Air
    }
}

/// A block's material plus its auxiliary data byte (flow level, facing, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockState {
    pub material: Material,
    pub data: u8,
}

impl BlockState {
    pub const AIR: BlockState = BlockState {
        material: Material::Air,
        data: 0,
    };

    pub fn new(material: Material, data: u8) -> Self {
        Self { material, data }
    }
}

impl From<Material> for BlockState {
    fn from(material: Material) -> Self {
        Self { material, data: 0 }
    }
}

/// Ephemeral (position, material) pair handed over by the host with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRef {
    pub pos: BlockPos,
    pub material: Material,
}

impl BlockRef {
    pub fn new(pos: BlockPos, material: Material) -> Self {
        Self { pos, material }
    }
}

/// One of the six faces of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockFace {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Unit offset pointing out of this face.
    pub fn normal(self) -> IVec3 {
        match self {
            Self::North => IVec3::NEG_Z,
            Self::South => IVec3::Z,
            Self::East => IVec3::X,
            Self::West => IVec3::NEG_X,
            Self::Up => IVec3::Y,
            Self::Down => IVec3::NEG_Y,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Items a player can hold when interacting with the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    Bucket,
    WaterBucket,
    LavaBucket,
    MilkBucket,
    FlintAndSteel,
    Block(Material),
    Other(u16),
}

impl Item {
    /// Family of the fluid a bucket pours out, if any.
    pub fn poured_family(self) -> Option<FluidFamily> {
        match self {
            Self::WaterBucket => Some(FluidFamily::Water),
            Self::LavaBucket => Some(FluidFamily::Lava),
            _ => None,
        }
    }

    /// Items that set fire to the block they are used on.
    pub fn is_ignition(self) -> bool {
        self == Self::FlintAndSteel
    }
}
