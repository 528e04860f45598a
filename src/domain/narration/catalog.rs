//! Narration Context - Catalog
//!
//! 旁白台本目录：有序的旁白单元集合
//!
//! 不变量:
//! - 单元按台本顺序排列，顺序即渲染顺序
//! - id 在目录内唯一，且作为输出文件名主干
//! - text 不可为空

use serde::Deserialize;
use std::collections::HashSet;

use super::errors::CatalogError;

/// 旁白单元 - 最小渲染单位
///
/// 一条带标签的台本文本，渲染为一个音频文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationUnit {
    /// 单元 ID（输出文件名主干）
    id: String,
    /// 台本文本
    text: String,
    /// 所属章节（可选，仅用于进度展示）
    section: Option<String>,
    /// 预期朗读时长（秒，可选）
    duration_secs: Option<u32>,
}

impl NarrationUnit {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Result<Self, CatalogError> {
        let id = id.into();
        let text = text.into();
        if id.is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if text.is_empty() {
            return Err(CatalogError::EmptyText(id));
        }
        Ok(Self {
            id,
            text,
            section: None,
            duration_secs: None,
        })
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_duration_secs(mut self, secs: u32) -> Result<Self, CatalogError> {
        if secs == 0 {
            return Err(CatalogError::ZeroDuration(self.id));
        }
        self.duration_secs = Some(secs);
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn duration_secs(&self) -> Option<u32> {
        self.duration_secs
    }
}

/// 旁白目录
///
/// 一次批量渲染处理的全部单元，构造时校验 ID 唯一性
#[derive(Debug, Clone)]
pub struct NarrationCatalog {
    units: Vec<NarrationUnit>,
}

impl NarrationCatalog {
    pub fn new(units: Vec<NarrationUnit>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for unit in &units {
            if !seen.insert(unit.id().to_string()) {
                return Err(CatalogError::DuplicateId(unit.id().to_string()));
            }
        }
        Ok(Self { units })
    }

    /// 从 TOML 文本解析目录
    ///
    /// 格式:
    /// ```toml
    /// [[unit]]
    /// id = "intro_1"
    /// section = "自己紹介"
    /// duration_secs = 15
    /// text = "..."
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(input).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let mut units = Vec::with_capacity(file.units.len());
        for row in file.units {
            let mut unit = NarrationUnit::new(row.id, row.text)?;
            if let Some(section) = row.section {
                unit = unit.with_section(section);
            }
            if let Some(secs) = row.duration_secs {
                unit = unit.with_duration_secs(secs)?;
            }
            units.push(unit);
        }

        Self::new(units)
    }

    pub fn units(&self) -> &[NarrationUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// 目录声明的总时长（秒），缺省时长的单元计 0
    pub fn declared_duration_secs(&self) -> u32 {
        self.units.iter().filter_map(|u| u.duration_secs()).sum()
    }
}

/// TOML 台本文件结构
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "unit", default)]
    units: Vec<UnitRow>,
}

#[derive(Debug, Deserialize)]
struct UnitRow {
    id: String,
    text: String,
    #[serde(default)]
    section: Option<String>,
    #[serde(default)]
    duration_secs: Option<u32>,
}
