//! Menu selection

use std::fmt;

/// Lowest selectable menu number
pub const MIN_SELECTOR: i64 = 1;
/// Highest selectable menu number
pub const MAX_SELECTOR: i64 = 7;

/// The operation chosen from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationSelector {
    /// `a + b`
    Add = 1,
    /// `a - b`
    Subtract = 2,
    /// `a * b`
    Multiply = 3,
    /// `a / b`
    Divide = 4,
    /// `base ^ exponent`
    Power = 5,
    /// `sqrt(a)`
    SquareRoot = 6,
    /// Leave the calculator
    Exit = 7,
}

impl OperationSelector {
    /// All selectors in menu order
    pub const ALL: [OperationSelector; 7] = [
        OperationSelector::Add,
        OperationSelector::Subtract,
        OperationSelector::Multiply,
        OperationSelector::Divide,
        OperationSelector::Power,
        OperationSelector::SquareRoot,
        OperationSelector::Exit,
    ];

    /// Map a menu number to a selector
    pub fn from_number(number: i64) -> Option<Self> {
        if !(MIN_SELECTOR..=MAX_SELECTOR).contains(&number) {
            return None;
        }
        Some(Self::ALL[(number - MIN_SELECTOR) as usize])
    }

    /// Menu number of this selector
    pub fn number(self) -> i64 {
        self as i64
    }

    /// Label shown in the menu
    pub fn label(self) -> &'static str {
        match self {
            OperationSelector::Add => "Addition",
            OperationSelector::Subtract => "Subtraction",
            OperationSelector::Multiply => "Multiplication",
            OperationSelector::Divide => "Division",
            OperationSelector::Power => "Power (x^y)",
            OperationSelector::SquareRoot => "Square Root",
            OperationSelector::Exit => "Exit",
        }
    }

    /// Number of operands the operation consumes
    pub fn arity(self) -> usize {
        match self {
            OperationSelector::Add
            | OperationSelector::Subtract
            | OperationSelector::Multiply
            | OperationSelector::Divide
            | OperationSelector::Power => 2,
            OperationSelector::SquareRoot => 1,
            OperationSelector::Exit => 0,
        }
    }
}

impl fmt::Display for OperationSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
