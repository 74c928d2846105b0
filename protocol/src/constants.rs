//! 协议常量定义

/// 默认搜索深度（根节点下 3 层）
pub const DEFAULT_MAX_DEPTH: u8 = 3;

/// 默认安全余量（毫秒）- 为返回走法预留的时间
pub const DEFAULT_SAFETY_MARGIN_MS: u64 = 50;

/// 文本棋盘允许的最大边长
pub const MAX_GRID_SIZE: usize = 16;

/// 空格子字符
pub const EMPTY_CHAR: char = '.';

/// 文本棋盘的行分隔符
pub const ROW_SEPARATOR: char = '/';
