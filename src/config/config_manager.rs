// ==========================================
// 排班引擎 - 配置管理器
// ==========================================
// 职责: 配置加载（JSON 文件/字符串）、校验、快照
// 规则: 文件中缺失的键回落到默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::run_config::RunConfig;
use crate::config::scoring_weights::{EmergencyWeights, ScoringWeights};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ==========================================
// EngineConfig - 引擎配置全集
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub run: RunConfig,
    pub scoring: ScoringWeights,
    pub emergency: EmergencyWeights,
}

impl EngineConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.run.validate()?;
        self.scoring.validate()?;
        self.emergency.validate()?;
        Ok(())
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: EngineConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 由已有配置创建（会先校验）
    pub fn from_config(config: EngineConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source: None,
        })
    }

    /// 从 JSON 字符串加载
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        debug!("配置字符串解析完成");
        Ok(Self {
            config,
            source: None,
        })
    }

    /// 从 JSON 文件加载
    ///
    /// # 参数
    /// - path: 配置文件路径
    ///
    /// # 返回
    /// - Err(ConfigError::FileRead): 文件不可读
    /// - Err(ConfigError::Parse): JSON 格式错误
    /// - Err(其他): 取值校验失败
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut manager = Self::from_json_str(&raw)?;
        manager.source = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            days = manager.config.run.days.len(),
            hours = manager.config.run.hours.len(),
            "配置文件加载完成"
        );
        Ok(manager)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn run_config(&self) -> &RunConfig {
        &self.config.run
    }

    pub fn scoring_weights(&self) -> &ScoringWeights {
        &self.config.scoring
    }

    pub fn emergency_weights(&self) -> &EmergencyWeights {
        &self.config.emergency
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 获取配置快照（JSON格式）
    ///
    /// # 用途
    /// - 随排班结果一同存档,保证复算时配置一致
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(&self.config)?)
    }
}
