// ==========================================
// 排班引擎 - 花名册导入器
// ==========================================
// 职责: 整合导入流程,从原始行到 Worker 列表
// 流程: 映射 → 校验 → 主键去重 → 汇总
// 红线: 无效记录跳过并记录,不中断整批导入
// ==========================================

use crate::domain::run::RunWarning;
use crate::domain::worker::{RawWorkerRecord, Worker};
use crate::importer::error::ImportError;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::roster_validator::RosterValidator;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use tracing::{info, instrument, warn};

// ==========================================
// RejectedRecord - 被跳过的记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub row_number: usize,
    pub worker_id: Option<String>,
    pub error: ImportError,
}

// ==========================================
// RosterImport - 导入结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterImport {
    pub workers: Vec<Worker>, // 保持输入顺序
    pub rejected: Vec<RejectedRecord>,
}

impl RosterImport {
    /// 被跳过的记录转换为运行告警
    pub fn warnings(&self) -> Vec<RunWarning> {
        self.rejected
            .iter()
            .map(|r| RunWarning::InvalidWorkerRecord {
                row_number: r.row_number,
                worker_id: r.worker_id.clone(),
                reason: r.error.to_string(),
            })
            .collect()
    }
}

// ==========================================
// RosterImporter - 花名册导入器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterImporter {
    field_mapper: FieldMapper,
    validator: RosterValidator,
}

impl RosterImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 导入表格行（行号从 1 开始）
    pub fn import_rows(&self, rows: &[HashMap<String, String>]) -> RosterImport {
        let records: Vec<RawWorkerRecord> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| self.field_mapper.map_row(row, i + 1))
            .collect();
        self.import_records(&records)
    }

    /// 导入 JSON 行
    ///
    /// 非对象元素视为缺少全部字段的无效记录
    pub fn import_json_rows(&self, rows: &[Value]) -> RosterImport {
        let empty = Map::new();
        let records: Vec<RawWorkerRecord> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                self.field_mapper
                    .map_json_row(row.as_object().unwrap_or(&empty), i + 1)
            })
            .collect();
        self.import_records(&records)
    }

    /// 校验已映射的记录
    #[instrument(skip(self, records), fields(total = records.len()))]
    pub fn import_records(&self, records: &[RawWorkerRecord]) -> RosterImport {
        let mut result = RosterImport::default();
        let mut seen_ids = HashSet::new();

        for record in records {
            let outcome = self.validator.validate(record).and_then(|worker| {
                if seen_ids.insert(worker.id.clone()) {
                    Ok(worker)
                } else {
                    Err(ImportError::DuplicateWorkerId {
                        row: record.row_number,
                        id: worker.id,
                    })
                }
            });

            match outcome {
                Ok(worker) => result.workers.push(worker),
                Err(error) => {
                    let worker_id = record.id.clone().or_else(|| record.name.clone());
                    warn!(
                        row = error.row(),
                        worker_id = ?worker_id,
                        error = %error,
                        "跳过无效员工记录"
                    );
                    result.rejected.push(RejectedRecord {
                        row_number: record.row_number,
                        worker_id,
                        error,
                    });
                }
            }
        }

        info!(
            accepted = result.workers.len(),
            rejected = result.rejected.len(),
            "花名册导入完成"
        );
        result
    }
}
