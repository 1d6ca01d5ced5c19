/// 訪問ゾーンの枠線
pub const VISITED_ZONE: &str = "#000";
/// 未訪問ゾーンの枠線（show_all_zones 時のみ）
pub const IDLE_ZONE: &str = "#999";
/// ルート線と矢印
pub const ROUTE: &str = "#e00";
/// 停留点ラベル
pub const LABEL: &str = "#1a4fd6";
/// 停留点ラベルの縁取り
pub const LABEL_HALO: &str = "#fff";
