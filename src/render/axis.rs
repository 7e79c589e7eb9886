//! Axis selector choices for the visualization panel

/// Column choices plus the current X/Y picks (indices into `choices`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisSelector {
    choices: Vec<String>,
    x: Option<usize>,
    y: Option<usize>,
}

impl AxisSelector {
    /// Replace the choices; previous picks are cleared
    pub fn populate(&mut self, columns: &[String]) {
        self.choices = columns.to_vec();
        self.x = None;
        self.y = None;
    }

    pub fn from_columns(columns: &[String]) -> Self {
        let mut selector = Self::default();
        selector.populate(columns);
        selector
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn x_column(&self) -> Option<&str> {
        self.x.and_then(|i| self.choices.get(i)).map(String::as_str)
    }

    pub fn y_column(&self) -> Option<&str> {
        self.y.and_then(|i| self.choices.get(i)).map(String::as_str)
    }

    /// Step X through none → first → ... → last → none
    pub fn cycle_x(&mut self) {
        self.x = Self::step(self.x, self.choices.len());
    }

    pub fn cycle_y(&mut self) {
        self.y = Self::step(self.y, self.choices.len());
    }

    /// Pick a column by name; unknown names leave the pick unset
    pub fn select_x(&mut self, column: &str) {
        self.x = self.choices.iter().position(|c| c == column);
    }

    pub fn select_y(&mut self, column: &str) {
        self.y = self.choices.iter().position(|c| c == column);
    }

    fn step(current: Option<usize>, len: usize) -> Option<usize> {
        match current {
            None if len > 0 => Some(0),
            Some(i) if i + 1 < len => Some(i + 1),
            _ => None,
        }
    }
}
