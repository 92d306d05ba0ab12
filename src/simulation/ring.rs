//! 三缓冲状态环
//!
//! 三个槽位各保存一帧全部粒子的位置。每个tick通过`(tick + offset) % 3`
//! 重新推导逻辑角色（上一帧/当前帧/下一帧）到物理槽位的映射：
//!
//! ```text
//! tick      0   1   2   3
//! previous  0   1   2   0
//! current   1   2   0   1
//! next      2   0   1   2
//! ```
//!
//! 某个tick作为`Next`写入的槽位，下一个tick成为`Current`，再下一个tick成为
//! `Previous`，写入目标永远不会与同一tick的读取来源重叠。

use super::seeding::InitialMotion;
use glam::Vec3;

/// 槽位数量
pub const SLOT_COUNT: usize = 3;

/// 逻辑角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// 上一帧（只读）
    Previous,
    /// 当前帧（只读）
    Current,
    /// 下一帧（本tick唯一的写入目标）
    Next,
}

impl Role {
    /// 所有角色
    pub const ALL: [Role; SLOT_COUNT] = [Role::Previous, Role::Current, Role::Next];

    /// 角色偏移量
    pub fn offset(self) -> u64 {
        match self {
            Role::Previous => 0,
            Role::Current => 1,
            Role::Next => 2,
        }
    }
}

/// 一个tick的全部粒子位置快照，按`(row, col)`行主序排列
#[derive(Debug, Clone, PartialEq)]
pub struct StateSlot {
    positions: Vec<Vec3>,
}

impl StateSlot {
    fn from_positions(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    /// 粒子位置切片
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// 原始字节视图，供外部渲染器直接上传到GPU
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// 三缓冲状态环
///
/// 整个运行期间只存在一个实例；三个槽位各自独占，不会在环外共享。
#[derive(Debug, Clone)]
pub struct StateRing {
    slots: [StateSlot; SLOT_COUNT],
    side: usize,
    tick: u64,
}

impl StateRing {
    /// 创建状态环
    ///
    /// 槽位`k`写入`seed + (0, k * initial_speed + upward_bias, 0)`，
    /// 因此tick 0就已经拥有一对有效的上一帧/当前帧，无需特殊处理。
    ///
    /// # Panics
    ///
    /// `seeds.len()`不等于`side * side`、`side`为0，或种子含非有限坐标时panic。
    pub fn new(side: usize, seeds: &[Vec3], motion: InitialMotion) -> Self {
        assert!(side > 0, "grid side must be positive");
        assert_eq!(
            seeds.len(),
            side * side,
            "seed count {} does not match grid {}x{}",
            seeds.len(),
            side,
            side
        );
        if let Some(index) = seeds.iter().position(|p| !p.is_finite()) {
            panic!("seed {index} is not finite: {}", seeds[index]);
        }

        let slots = [0usize, 1, 2].map(|pass| {
            let lift = Vec3::new(
                0.0,
                pass as f32 * motion.initial_speed + motion.upward_bias,
                0.0,
            );
            StateSlot::from_positions(seeds.iter().map(|&p| p + lift).collect())
        });

        Self {
            slots,
            side,
            tick: 0,
        }
    }

    /// 角色在指定tick对应的物理槽位
    pub fn slot_for(tick: u64, role: Role) -> usize {
        ((tick + role.offset()) % SLOT_COUNT as u64) as usize
    }

    /// tick计数加一，没有其他副作用
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// 当前tick
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// 网格边长
    pub fn side(&self) -> usize {
        self.side
    }

    /// 粒子数量（`side²`）
    pub fn particle_count(&self) -> usize {
        self.side * self.side
    }

    /// 读取任意tick下某个角色的槽位
    pub fn read(&self, tick: u64, role: Role) -> &[Vec3] {
        self.slots[Self::slot_for(tick, role)].positions()
    }

    /// 读取当前tick下某个角色的槽位
    pub fn read_role(&self, role: Role) -> &[Vec3] {
        self.read(self.tick, role)
    }

    /// 当前tick下某个角色的完整槽位
    pub fn slot(&self, role: Role) -> &StateSlot {
        &self.slots[Self::slot_for(self.tick, role)]
    }

    /// 按下标读取粒子
    ///
    /// # Panics
    ///
    /// 下标越界时panic。
    pub fn particle(&self, role: Role, index: usize) -> Vec3 {
        let count = self.particle_count();
        assert!(
            index < count,
            "particle index {index} out of range for {count} particles"
        );
        self.read_role(role)[index]
    }

    /// 按网格坐标读取粒子
    ///
    /// # Panics
    ///
    /// `row`或`col`超出网格时panic。
    pub fn particle_at(&self, role: Role, row: usize, col: usize) -> Vec3 {
        assert!(
            row < self.side && col < self.side,
            "grid cell ({row}, {col}) out of range for side {}",
            self.side
        );
        self.read_role(role)[row * self.side + col]
    }

    /// 同时借出本tick的两个只读槽位和唯一的写入槽位
    pub(crate) fn split_roles(&mut self) -> (&[Vec3], &[Vec3], &mut [Vec3]) {
        let previous = Self::slot_for(self.tick, Role::Previous);
        let current = Self::slot_for(self.tick, Role::Current);
        let next = Self::slot_for(self.tick, Role::Next);

        let [a, b, c] = &mut self.slots;
        let mut by_index = [
            Some(&mut a.positions),
            Some(&mut b.positions),
            Some(&mut c.positions),
        ];
        // 三个下标互不相同，每个槽位只会被取出一次
        let (Some(prev), Some(curr), Some(next)) = (
            by_index[previous].take(),
            by_index[current].take(),
            by_index[next].take(),
        ) else {
            unreachable!("role slots alias at tick {}", self.tick);
        };

        (prev.as_slice(), curr.as_slice(), next.as_mut_slice())
    }
}
