const MAX_ENTRY_DIGITS: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CalcAction {
    Digit(char),
    Decimal,
    Backspace,
    Clear,
    ToggleSign,
    Percent,
    Binary(BinaryOp),
    Equals,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CalcPhase {
    /// Typing the left-hand operand (initial state and after `C`).
    EnteringFirst,
    /// An operator is chosen; the entry is replaced by the first digit typed.
    AwaitingSecond,
    /// `=` was pressed; the next digit starts a fresh calculation.
    ShowingResult,
}

#[derive(Clone, Debug)]
pub(crate) struct CalculatorState {
    entry: String,
    accumulator: Option<f64>,
    pending_op: Option<BinaryOp>,
    phase: CalcPhase,
    replace_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            entry: "0".to_string(),
            accumulator: None,
            pending_op: None,
            phase: CalcPhase::EnteringFirst,
            replace_entry: false,
        }
    }
}

impl CalculatorState {
    pub(crate) fn apply(&mut self, action: CalcAction) {
        match action {
            CalcAction::Digit(digit) => self.input_digit(digit),
            CalcAction::Decimal => self.input_decimal(),
            CalcAction::Backspace => self.backspace(),
            CalcAction::Clear => *self = Self::default(),
            CalcAction::ToggleSign => self.toggle_sign(),
            CalcAction::Percent => self.percent(),
            CalcAction::Binary(op) => self.set_pending_operation(op),
            CalcAction::Equals => self.equals(),
        }
    }

    pub(crate) fn display_text(&self) -> &str {
        &self.entry
    }

    pub(crate) fn phase(&self) -> CalcPhase {
        self.phase
    }

    pub(crate) fn pending_op(&self) -> Option<BinaryOp> {
        self.pending_op
    }

    fn current_value(&self) -> f64 {
        self.entry.parse::<f64>().unwrap_or(0.0)
    }

    fn begin_entry(&mut self) {
        if !self.replace_entry {
            return;
        }
        self.entry = "0".to_string();
        self.replace_entry = false;
        if self.phase == CalcPhase::ShowingResult {
            self.phase = CalcPhase::EnteringFirst;
            self.accumulator = None;
        }
    }

    fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        self.begin_entry();

        let digits_only = self.entry.chars().filter(|c| c.is_ascii_digit()).count();
        if digits_only >= MAX_ENTRY_DIGITS {
            return;
        }

        match self.entry.as_str() {
            "0" => self.entry = digit.to_string(),
            "-0" => self.entry = format!("-{digit}"),
            _ => self.entry.push(digit),
        }
    }

    fn input_decimal(&mut self) {
        self.begin_entry();
        if !self.entry.contains('.') {
            self.entry.push('.');
        }
    }

    fn backspace(&mut self) {
        if self.replace_entry {
            return;
        }
        self.entry.pop();
        if self.entry.is_empty() || self.entry == "-" {
            self.entry = "0".to_string();
        }
    }

    fn toggle_sign(&mut self) {
        if self.current_value() == 0.0 {
            return;
        }
        if let Some(stripped) = self.entry.strip_prefix('-') {
            self.entry = stripped.to_string();
        } else {
            self.entry = format!("-{}", self.entry);
        }
    }

    fn percent(&mut self) {
        let current = self.current_value();
        let value = match (self.accumulator, self.pending_op) {
            (Some(acc), Some(_)) => acc * current / 100.0,
            _ => current / 100.0,
        };
        self.entry = format_number(value);
        self.replace_entry = true;
    }

    fn set_pending_operation(&mut self, op: BinaryOp) {
        let current = self.current_value();

        let base = match (self.pending_op, self.accumulator) {
            // Operator pressed twice in a row: replace it.
            (Some(_), Some(acc)) if self.replace_entry => acc,
            (Some(pending), Some(acc)) => apply_binary(acc, pending, current),
            _ => current,
        };

        self.accumulator = Some(base);
        self.pending_op = Some(op);
        self.phase = CalcPhase::AwaitingSecond;
        self.entry = format_number(base);
        self.replace_entry = true;
    }

    fn equals(&mut self) {
        let (Some(acc), Some(op)) = (self.accumulator, self.pending_op) else {
            return;
        };
        let result = apply_binary(acc, op, self.current_value());
        self.entry = format_number(result);
        self.accumulator = Some(result);
        self.pending_op = None;
        self.phase = CalcPhase::ShowingResult;
        self.replace_entry = true;
    }
}

pub(crate) fn keyboard_action(key: &str) -> Option<CalcAction> {
    match key {
        "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
            key.chars().next().map(CalcAction::Digit)
        }
        "." | "," => Some(CalcAction::Decimal),
        "+" => Some(CalcAction::Binary(BinaryOp::Add)),
        "-" => Some(CalcAction::Binary(BinaryOp::Subtract)),
        "*" | "x" | "X" => Some(CalcAction::Binary(BinaryOp::Multiply)),
        "/" => Some(CalcAction::Binary(BinaryOp::Divide)),
        "%" => Some(CalcAction::Percent),
        "=" | "Enter" => Some(CalcAction::Equals),
        "Backspace" => Some(CalcAction::Backspace),
        "Escape" | "c" | "C" | "Delete" => Some(CalcAction::Clear),
        "F9" => Some(CalcAction::ToggleSign),
        _ => None,
    }
}

/// Division by zero and overflow collapse to `0` instead of an error state.
fn apply_binary(lhs: f64, op: BinaryOp, rhs: f64) -> f64 {
    let result = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide if rhs == 0.0 => 0.0,
        BinaryOp::Divide => lhs / rhs,
    };

    if result.is_finite() {
        result
    } else {
        0.0
    }
}

pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }

    let mut text = format!("{value:.10}");
    while text.contains('.') && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(state: &mut CalculatorState, keys: &str) {
        for key in keys.split_whitespace() {
            let action = match key {
                "÷" => CalcAction::Binary(BinaryOp::Divide),
                "×" => CalcAction::Binary(BinaryOp::Multiply),
                "C" => CalcAction::Clear,
                "±" => CalcAction::ToggleSign,
                "<" => CalcAction::Backspace,
                other => keyboard_action(other)
                    .unwrap_or_else(|| panic!("unsupported test key: {other}")),
            };
            state.apply(action);
        }
    }

    fn run(keys: &str) -> CalculatorState {
        let mut state = CalculatorState::default();
        press(&mut state, keys);
        state
    }

    #[test]
    fn default_state_is_entering_first_operand() {
        let state = CalculatorState::default();
        assert_eq!(state.display_text(), "0");
        assert_eq!(state.phase(), CalcPhase::EnteringFirst);
        assert_eq!(state.pending_op(), None);
    }

    #[test]
    fn division_by_zero_yields_zero() {
        let state = run("8 ÷ 0 =");
        assert_eq!(state.display_text(), "0");
        assert_eq!(state.phase(), CalcPhase::ShowingResult);

        let chained = run("8 ÷ 0 + 5 =");
        assert_eq!(chained.display_text(), "5");
    }

    #[test]
    fn phases_follow_operand_entry() {
        let mut state = CalculatorState::default();
        press(&mut state, "1 2");
        assert_eq!(state.phase(), CalcPhase::EnteringFirst);
        assert_eq!(state.display_text(), "12");

        press(&mut state, "+");
        assert_eq!(state.phase(), CalcPhase::AwaitingSecond);
        assert_eq!(state.pending_op(), Some(BinaryOp::Add));
        assert_eq!(state.display_text(), "12");

        press(&mut state, "3");
        assert_eq!(state.display_text(), "3");

        press(&mut state, "=");
        assert_eq!(state.phase(), CalcPhase::ShowingResult);
        assert_eq!(state.display_text(), "15");

        press(&mut state, "4");
        assert_eq!(state.phase(), CalcPhase::EnteringFirst);
        assert_eq!(state.display_text(), "4");
    }

    #[test]
    fn operators_chain_and_replace() {
        assert_eq!(run("2 + 3 × 4 =").display_text(), "20");
        assert_eq!(run("2 + - 3 =").display_text(), "-1");
        assert_eq!(run("2 + =").display_text(), "4");
        assert_eq!(run("7 = ").display_text(), "7");
    }

    #[test]
    fn result_can_seed_the_next_operation() {
        assert_eq!(run("6 × 7 = - 2 =").display_text(), "40");
    }

    #[test]
    fn decimal_entry_and_formatting() {
        assert_eq!(run(". 5 + . 2 5 =").display_text(), "0.75");
        assert_eq!(run("1 . . 2").display_text(), "1.2");
        assert_eq!(run("1 ÷ 3 =").display_text(), "0.3333333333");
        assert_eq!(run("0 . 1 + 0 . 2 =").display_text(), "0.3");
    }

    #[test]
    fn entry_editing_keys() {
        assert_eq!(run("1 2 3 <").display_text(), "12");
        assert_eq!(run("5 < <").display_text(), "0");
        assert_eq!(run("5 ±").display_text(), "-5");
        assert_eq!(run("5 ± ±").display_text(), "5");
        assert_eq!(run("0 ±").display_text(), "0");
        assert_eq!(run("5 0 %").display_text(), "0.5");
        assert_eq!(run("2 0 0 + 1 0 %").display_text(), "20");
        assert_eq!(run("9 + 1 C").phase(), CalcPhase::EnteringFirst);
    }

    #[test]
    fn entry_is_capped() {
        let mut state = CalculatorState::default();
        for _ in 0..(MAX_ENTRY_DIGITS + 5) {
            state.apply(CalcAction::Digit('9'));
        }
        assert_eq!(state.display_text().len(), MAX_ENTRY_DIGITS);
    }

    #[test]
    fn overflow_never_shows_non_finite_text() {
        assert_eq!(format_number(f64::INFINITY), "0");
        assert_eq!(format_number(f64::NAN), "0");
        assert_eq!(apply_binary(f64::MAX, BinaryOp::Multiply, 10.0), 0.0);
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn keyboard_action_maps_supported_keys() {
        assert_eq!(keyboard_action("7"), Some(CalcAction::Digit('7')));
        assert_eq!(keyboard_action("Enter"), Some(CalcAction::Equals));
        assert_eq!(keyboard_action("Escape"), Some(CalcAction::Clear));
        assert_eq!(
            keyboard_action("x"),
            Some(CalcAction::Binary(BinaryOp::Multiply))
        );
        assert_eq!(keyboard_action("Tab"), None);
    }
}
