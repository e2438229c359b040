//! Selectors shared by every dashboard page that renders a `cd-table`.

pub const TABLE: &str = "cd-table";
pub const TABLE_LOADED: &str = "datatable-scroller, .empty-row";
pub const TABLE_SEARCH_INPUT: &str = "cd-table .search input";
pub const TABLE_COUNT_SPANS: &str = ".datatable-footer-inner .page-count span";
pub const TABLE_ROW: &str = ".datatable-body-row";
pub const ROW_EXPAND_TOGGLE: &str = ".tc_expand-collapse";

pub const ACTION_DROPDOWN_TOGGLE: &str = ".table-actions button.dropdown-toggle";

pub const MODAL: &str = "cd-modal";
pub const MODAL_CONFIRM_CHECKBOX: &str = "cd-modal .custom-control-label";
pub const MODAL_BUTTON: &str = "cd-modal button";

pub const BREADCRUMB_ACTIVE: &str = ".breadcrumb-item.active";
pub const TAB: &str = ".nav.nav-tabs li";

/// Body cells of `column` (1-based) across all rows.
pub fn table_cell(column: usize) -> String {
    format!("datatable-body-row datatable-body-cell:nth-child({column})")
}

/// The cell of `column` inside a row element.
pub fn row_cell(column: usize) -> String {
    format!("datatable-body-cell:nth-child({column})")
}

/// Badges rendered in the cell of `column` inside a row element.
pub fn row_cell_badges(column: usize) -> String {
    format!("datatable-body-cell:nth-child({column}) .badge")
}

/// Entry of the table action dropdown.
pub fn action_button(action: &str) -> String {
    format!("button.{action}")
}
