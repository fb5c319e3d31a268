// ゲーム設定のValue Objects

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{GRID_SIZE, MAGNIFIER_DEFAULT, MAGNIFIER_MAX, MAGNIFIER_MIN, MAGNIFIER_STEP};

/// 盤面サイズを表すValue Object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(anyhow!("盤面サイズは1以上である必要があります"));
        }
        if size > 500 {
            return Err(anyhow!("盤面サイズが大きすぎます: {}", size));
        }
        Ok(Self(size))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(GRID_SIZE)
    }
}

impl TryFrom<usize> for GridSize {
    type Error = anyhow::Error;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

/// 拡大鏡サイズ（奇数、7〜25）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct MagnifierSize(usize);

impl MagnifierSize {
    pub fn new(size: usize) -> Result<Self> {
        if !(MAGNIFIER_MIN..=MAGNIFIER_MAX).contains(&size) {
            return Err(anyhow!(
                "拡大鏡サイズは{}〜{}の範囲: {}",
                MAGNIFIER_MIN,
                MAGNIFIER_MAX,
                size
            ));
        }
        if size % 2 == 0 {
            return Err(anyhow!("拡大鏡サイズは奇数である必要があります: {}", size));
        }
        Ok(Self(size))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn increased(self) -> Self {
        Self((self.0 + MAGNIFIER_STEP).min(MAGNIFIER_MAX))
    }

    pub fn decreased(self) -> Self {
        Self(self.0.saturating_sub(MAGNIFIER_STEP).max(MAGNIFIER_MIN))
    }
}

impl Default for MagnifierSize {
    fn default() -> Self {
        Self(MAGNIFIER_DEFAULT)
    }
}

impl TryFrom<usize> for MagnifierSize {
    type Error = anyhow::Error;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<MagnifierSize> for usize {
    fn from(size: MagnifierSize) -> Self {
        size.0
    }
}

/// 表示設定
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub show_magnifier: bool,
    pub show_highlighting: bool,
    pub show_potential: bool,
    pub magnifier_size: MagnifierSize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            show_magnifier: true,
            show_highlighting: true,
            show_potential: false,
            magnifier_size: MagnifierSize::default(),
        }
    }
}
