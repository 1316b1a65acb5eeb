use std::cmp::Ordering;

use serde::Deserialize;

use crate::models::Project;
use crate::utils::size_format;

/// 表格可排序的列，顺序即列索引
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Name,
    Type,
    Size,
    Files,
    Status,
}

/// 列标题与宽度
const HEADERS: [(&str, u16); 5] = [
    ("Project", 25),
    ("Type", 8),
    ("Size", 10),
    ("Files", 8),
    ("Git Status", 15),
];

const ASCENDING_MARK: &str = " ▲";
const DESCENDING_MARK: &str = " ▼";

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Name,
        SortColumn::Type,
        SortColumn::Size,
        SortColumn::Files,
        SortColumn::Status,
    ];

    pub fn index(self) -> usize {
        match self {
            SortColumn::Name => 0,
            SortColumn::Type => 1,
            SortColumn::Size => 2,
            SortColumn::Files => 3,
            SortColumn::Status => 4,
        }
    }

    /// 索引按列数取模
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Self {
        let n = Self::ALL.len();
        Self::from_index(self.index() + n - 1)
    }

    /// 升序比较两个项目
    fn compare(self, a: &Project, b: &Project) -> Ordering {
        match self {
            SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortColumn::Type => a.project_type.tag().cmp(b.project_type.tag()),
            SortColumn::Size => a.size.cmp(&b.size),
            SortColumn::Files => a.file_count.cmp(&b.file_count),
            SortColumn::Status => a.status.label().cmp(b.status.label()),
        }
    }
}

/// 按列和方向重新排序。
///
/// 使用稳定排序：键相等的项目保持原有相对顺序。降序只是把比较结果反转。
pub fn reorder(projects: &mut [Project], column: SortColumn, ascending: bool) {
    projects.sort_by(|a, b| {
        let ordering = column.compare(a, b);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

/// 生成五个列标题，当前排序列附加方向标记
pub fn render_columns(column: SortColumn, ascending: bool) -> Vec<(String, u16)> {
    HEADERS
        .iter()
        .enumerate()
        .map(|(i, (title, width))| {
            let mut title = (*title).to_string();
            if i == column.index() {
                title.push_str(if ascending { ASCENDING_MARK } else { DESCENDING_MARK });
            }
            (title, *width)
        })
        .collect()
}

/// 一行表格数据
pub fn render_row(project: &Project) -> [String; 5] {
    [
        project.name.clone(),
        project.project_type.tag().to_string(),
        size_format::format_size(project.size),
        project.file_count.to_string(),
        project.status.label().to_string(),
    ]
}
