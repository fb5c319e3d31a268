// Grid型 - N×Nの整数盤面を表現

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::cursor::Cursor;
use crate::constants::{CellValue, CLEARED, UNTOUCHED};
use crate::domain::sequence::LineKind;

/// N×Nの盤面（行優先で保持）
///
/// シリアライズ時は素の二次元配列として扱う。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<CellValue>>", into = "Vec<Vec<CellValue>>")]
pub struct Grid {
    size: usize,
    cells: Vec<CellValue>,
}

impl Grid {
    /// 新しい未操作の盤面を作成
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![UNTOUCHED; size * size],
        }
    }

    /// 二次元配列から構築（正方形でなければエラー）
    pub fn from_rows(rows: &[Vec<CellValue>]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(anyhow!("盤面が空です"));
        }
        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(anyhow!(
                    "盤面が正方形ではありません: {}行目の長さ{}（期待{}）",
                    y,
                    row.len(),
                    size
                ));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { size, cells })
    }

    /// 二次元配列に変換
    pub fn to_rows(&self) -> Vec<Vec<CellValue>> {
        self.cells.chunks(self.size.max(1)).map(|r| r.to_vec()).collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// セルを取得（範囲外はNone）
    pub fn get(&self, row: usize, col: usize) -> Option<CellValue> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// セルを設定
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) -> Result<()> {
        if row >= self.size || col >= self.size {
            return Err(anyhow!("座標が範囲外: ({}, {})", row, col));
        }
        self.cells[row * self.size + col] = value;
        Ok(())
    }

    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> CellValue {
        self.cells[row * self.size + col]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut CellValue {
        &mut self.cells[row * self.size + col]
    }

    /// 盤面全体への直接アクセス（読み取り専用）
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> &[CellValue] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    pub fn column(&self, col: usize) -> Vec<CellValue> {
        (0..self.size).map(|y| self.at(y, col)).collect()
    }

    /// 行または列を取り出す
    pub fn line(&self, kind: LineKind, index: usize) -> Vec<CellValue> {
        match kind {
            LineKind::Row => self.row(index).to_vec(),
            LineKind::Column => self.column(index),
        }
    }

    /// 線上のoffset位置を盤面座標 (row, col) に変換
    #[inline]
    pub fn line_coord(kind: LineKind, index: usize, offset: usize) -> (usize, usize) {
        match kind {
            LineKind::Row => (index, offset),
            LineKind::Column => (offset, index),
        }
    }

    /// 消去済みセル数
    pub fn cleared_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == CLEARED).count()
    }

    /// 消去率（%、四捨五入）
    pub fn cleared_percentage(&self) -> u32 {
        let total = self.cells.len();
        if total == 0 {
            return 0;
        }
        ((self.cleared_count() as f64 / total as f64) * 100.0).round() as u32
    }

    /// カーソルが盤面内かを検証
    pub fn check_cursor(&self, cursor: Cursor) -> Result<()> {
        if cursor.row >= self.size || cursor.col >= self.size {
            return Err(anyhow!(
                "カーソルが範囲外: ({}, {}) / 盤面サイズ{}",
                cursor.row,
                cursor.col,
                self.size
            ));
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<CellValue>>> for Grid {
    type Error = anyhow::Error;

    fn try_from(rows: Vec<Vec<CellValue>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<CellValue>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}
