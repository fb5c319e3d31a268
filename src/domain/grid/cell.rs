// セル状態の定義（ドメイン層）

use anyhow::{anyhow, Result};

use crate::constants::{CellValue, CLEARED};

/// セル値を解釈した状態
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Untouched,   // 0
    Active(u32), // 加算回数
    Cleared,     // -1
}

impl CellState {
    /// セル値から状態に変換（-1以外の負値は未操作扱い）
    pub fn from_value(value: CellValue) -> Self {
        if value == CLEARED {
            CellState::Cleared
        } else if value > 0 {
            CellState::Active(value as u32)
        } else {
            CellState::Untouched
        }
    }

    /// 状態からセル値に変換
    pub fn to_value(self) -> CellValue {
        match self {
            CellState::Untouched => 0,
            CellState::Active(n) => n as CellValue,
            CellState::Cleared => CLEARED,
        }
    }

    /// 共有コードの文字からCellStateに変換
    pub fn from_share_char(ch: char) -> Result<Self> {
        match ch {
            'x' | 'X' => Ok(CellState::Cleared),
            '0' => Ok(CellState::Untouched),
            _ => Err(anyhow!("不正な文字: {}", ch)),
        }
    }

    /// 共有コードの文字に変換（数値は共有しない）
    pub fn to_share_char(self) -> char {
        match self {
            CellState::Cleared => 'x',
            CellState::Untouched | CellState::Active(_) => '0',
        }
    }
}
