//! Selector constants for the compiled picker style sheet.
//!
//! This module centralizes every class selector the calendar widget renders,
//! making them discoverable, avoiding typos, and keeping the sheet builders
//! and the tests on the same names.
//!
//! Day and time-row state modifiers follow the `--modifier` suffix
//! convention; sheet builders compose them with `&` for same-element
//! matches.

/// Picker frame and input.
pub mod picker {
    /// Outer picker container (`.dt-picker`).
    pub const CONTAINER: &str = ".dt-picker";

    /// Input wrapper (`.dt-picker__input-container`).
    pub const INPUT_CONTAINER: &str = ".dt-picker__input-container";

    /// Clear (×) button (`.dt-picker__clear-icon`).
    pub const CLEAR_ICON: &str = ".dt-picker__clear-icon";

    /// Portal backdrop (`.dt-picker__portal`).
    pub const PORTAL: &str = ".dt-picker__portal";
}

/// Header band, month/year dropdowns.
pub mod header {
    /// Header band (`.dt-picker__header`).
    pub const HEADER: &str = ".dt-picker__header";

    /// Dropdown row inside the header (`.dt-picker__header-dropdown`).
    pub const DROPDOWN_ROW: &str = ".dt-picker__header-dropdown";

    /// Month dropdown hit area (`.dt-picker__month-dropdown-container`).
    pub const MONTH_DROPDOWN_CONTAINER: &str = ".dt-picker__month-dropdown-container";

    /// Year dropdown hit area (`.dt-picker__year-dropdown-container`).
    pub const YEAR_DROPDOWN_CONTAINER: &str = ".dt-picker__year-dropdown-container";

    /// Collapsed month label row (`.dt-picker__month-read-view`).
    pub const MONTH_READ_VIEW: &str = ".dt-picker__month-read-view";

    /// Collapsed year label row (`.dt-picker__year-read-view`).
    pub const YEAR_READ_VIEW: &str = ".dt-picker__year-read-view";

    /// Month dropdown chevron (`.dt-picker__month-read-view--down-arrow`).
    pub const MONTH_DOWN_ARROW: &str = ".dt-picker__month-read-view--down-arrow";

    /// Year dropdown chevron (`.dt-picker__year-read-view--down-arrow`).
    pub const YEAR_DOWN_ARROW: &str = ".dt-picker__year-read-view--down-arrow";

    /// Currently shown month label (`.dt-picker__month-read-view--selected-month`).
    pub const SELECTED_MONTH: &str = ".dt-picker__month-read-view--selected-month";

    /// Currently shown year label (`.dt-picker__year-read-view--selected-year`).
    pub const SELECTED_YEAR: &str = ".dt-picker__year-read-view--selected-year";

    /// Open month dropdown panel (`.dt-picker__month-dropdown`).
    pub const MONTH_DROPDOWN: &str = ".dt-picker__month-dropdown";

    /// Open year dropdown panel (`.dt-picker__year-dropdown`).
    pub const YEAR_DROPDOWN: &str = ".dt-picker__year-dropdown";

    /// Current month title (`.dt-picker__current-month`).
    pub const CURRENT_MONTH: &str = ".dt-picker__current-month";

    /// Time column header (`.dt-picker__time-header`).
    pub const TIME_HEADER: &str = ".dt-picker__time-header";

    /// Year-view header (`.dt-picker__year-header`).
    pub const YEAR_HEADER: &str = ".dt-picker__year-header";
}

/// Navigation arrows.
pub mod nav {
    /// Navigation button (`.dt-picker__navigation`).
    pub const NAVIGATION: &str = ".dt-picker__navigation";

    /// Chevron container inside the button (`.dt-picker__navigation-icon`).
    pub const ICON: &str = ".dt-picker__navigation-icon";

    /// Previous-month modifier (`.dt-picker__navigation--previous`).
    pub const PREVIOUS: &str = ".dt-picker__navigation--previous";

    /// Next-month modifier (`.dt-picker__navigation--next`).
    pub const NEXT: &str = ".dt-picker__navigation--next";

    /// Next modifier when the time list is shown
    /// (`.dt-picker__navigation--next--with-time`).
    pub const NEXT_WITH_TIME: &str = ".dt-picker__navigation--next--with-time";

    /// Next modifier when a today button is shown
    /// (`.dt-picker__navigation--next--with-today-button`).
    pub const NEXT_WITH_TODAY: &str = ".dt-picker__navigation--next--with-today-button";
}

/// Day grid.
pub mod day {
    /// Month grid container (`.dt-picker__month`).
    pub const MONTH_GRID: &str = ".dt-picker__month";

    /// Weekday name row (`.dt-picker__day-names`).
    pub const NAMES_ROW: &str = ".dt-picker__day-names";

    /// Single weekday name (`.dt-picker__day-name`).
    pub const NAME: &str = ".dt-picker__day-name";

    /// Day cell (`.dt-picker__day`).
    pub const DAY: &str = ".dt-picker__day";

    /// Disabled day (`.dt-picker__day--disabled`).
    pub const DISABLED: &str = ".dt-picker__day--disabled";

    /// Selected day (`.dt-picker__day--selected`).
    pub const SELECTED: &str = ".dt-picker__day--selected";

    /// Day inside a confirmed range (`.dt-picker__day--in-range`).
    pub const IN_RANGE: &str = ".dt-picker__day--in-range";

    /// Day inside a range being dragged out
    /// (`.dt-picker__day--in-selecting-range`).
    pub const IN_SELECTING_RANGE: &str = ".dt-picker__day--in-selecting-range";

    /// Keyboard focus (`.dt-picker__day--keyboard-selected`).
    pub const KEYBOARD_SELECTED: &str = ".dt-picker__day--keyboard-selected";

    /// Day outside the shown month (`.dt-picker__day--outside-month`).
    pub const OUTSIDE_MONTH: &str = ".dt-picker__day--outside-month";

    /// Month cell in month-picker view (`.dt-picker__month-text`).
    pub const MONTH_TEXT_SELECTED: &str = ".dt-picker__month-text--selected";
    pub const MONTH_TEXT_IN_RANGE: &str = ".dt-picker__month-text--in-range";
    pub const MONTH_TEXT_IN_SELECTING_RANGE: &str = ".dt-picker__month-text--in-selecting-range";
    pub const MONTH_TEXT_KEYBOARD_SELECTED: &str = ".dt-picker__month-text--keyboard-selected";

    /// Quarter and year cells in their picker views.
    pub const QUARTER_TEXT_KEYBOARD_SELECTED: &str = ".dt-picker__quarter-text--keyboard-selected";
    pub const YEAR_TEXT_KEYBOARD_SELECTED: &str = ".dt-picker__year-text--keyboard-selected";
}

/// Time list.
pub mod time {
    /// Time column (`.dt-picker__time-container`).
    pub const CONTAINER: &str = ".dt-picker__time-container";

    /// Time list surface (`.dt-picker__time`).
    pub const TIME: &str = ".dt-picker__time";

    /// Scroll box (`.dt-picker__time-box`).
    pub const BOX: &str = ".dt-picker__time-box";

    /// The list itself (`ul.dt-picker__time-list`).
    pub const LIST: &str = "ul.dt-picker__time-list";

    /// One time row (`li.dt-picker__time-list-item`).
    pub const ITEM: &str = "li.dt-picker__time-list-item";

    /// Selected time row modifier (`.dt-picker__time-list-item--selected`).
    pub const ITEM_SELECTED: &str = ".dt-picker__time-list-item--selected";

    /// Disabled time row modifier (`.dt-picker__time-list-item--disabled`).
    pub const ITEM_DISABLED: &str = ".dt-picker__time-list-item--disabled";

    /// Manual time input row (`.dt-picker__input-time-container`).
    pub const INPUT_CONTAINER: &str = ".dt-picker__input-time-container";

    /// Caption of the manual time input (`.dt-picker__time-caption`).
    pub const CAPTION: &str = ".dt-picker__time-caption";
}

/// Popover triangle and placement scopes.
pub mod popover {
    /// The directional triangle (`.dt-picker__triangle`).
    pub const TRIANGLE: &str = ".dt-picker__triangle";

    /// Popper scope for bottom-anchored placements.
    pub const POPPER_BOTTOM: &str = ".dt-picker-popper[data-placement^=bottom]";

    /// Popper scope for top-anchored placements.
    pub const POPPER_TOP: &str = ".dt-picker-popper[data-placement^=top]";
}

/// Prefix a selector with `&` for a same-element match inside a nested block.
pub fn on_self(selector: &str) -> String {
    format!("&{selector}")
}

/// Same-element match for `class` excluding `excluded`.
pub fn on_self_not(selector: &str, excluded: &str) -> String {
    format!("&{selector}:not({excluded})")
}
