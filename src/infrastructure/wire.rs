// 解析のやり取りに使うJSONメッセージ

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::grid::Grid;
use crate::domain::potential::PotentialMap;
use crate::domain::sequence::{detect, Sequence};

/// 解析リクエスト {"grid": [[...]]}
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub grid: Grid,
}

/// 数列解析のレスポンス {"sequences": [...]}
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SequencesResponse {
    #[serde(default)]
    pub sequences: Vec<Sequence>,
}

/// 潜在値解析のレスポンス {"potentialMap": [[...]]}
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PotentialResponse {
    #[serde(rename = "potentialMap")]
    pub potential_map: PotentialMap,
}

impl AnalyzeRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("解析リクエストを読み込めません")
    }

    /// リクエストの盤面を解析してレスポンスを作る
    pub fn analyze(&self) -> SequencesResponse {
        SequencesResponse {
            sequences: detect(&self.grid),
        }
    }
}

impl SequencesResponse {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("数列レスポンスを書き出せません")
    }
}

impl PotentialResponse {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("潜在値レスポンスを書き出せません")
    }
}
