use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use attendance_core::model::{month_from_ordinal, MONTHS};
use attendance_core::{DayInput, Month};

/// Line-oriented input provider. Re-asks until the answer is valid;
/// end of input is an error rather than an endless loop.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Integer within `min..=max`.
    pub fn int_in_range(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<u32>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                Ok(_) => self.say(&format!("   ⚠ Enter a number between {} and {}", min, max))?,
                Err(_) => self.say("   ⚠ Invalid input! Please enter a valid number.")?,
            }
        }
    }

    /// Menu selection within `min..=max`.
    pub fn choice(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<u32>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                Ok(_) => self.say(&format!("   ⚠ Choose between {} and {}", min, max))?,
                Err(_) => self.say("   ⚠ Please enter a valid number")?,
            }
        }
    }

    pub fn month(&mut self) -> Result<Month> {
        self.say("\nAvailable months:")?;
        for (i, month) in MONTHS.iter().enumerate() {
            self.say(&format!("  {}. {}", i + 1, month.name()))?;
        }

        let choice = self.choice("\nSelect month (1-12): ", 1, 12)?;
        match month_from_ordinal(choice) {
            Some(month) => Ok(month),
            None => bail!("month {} out of range", choice),
        }
    }

    pub fn day_input(&mut self, day: u32) -> Result<DayInput> {
        loop {
            let line = self.read_line(&format!("Day {:2}: ", day))?;
            match line.parse::<DayInput>() {
                Ok(input) => return Ok(input),
                Err(_) => self.say("   ⚠ Invalid! Enter P, A, or H")?,
            }
        }
    }

    pub fn pause(&mut self) -> Result<()> {
        self.read_line("\nPress Enter to continue...")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(p: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&p.output).to_string()
    }

    #[test]
    fn test_int_in_range_reprompts() {
        let mut p = prompter("abc\n40\n 12 \n");
        assert_eq!(p.int_in_range("Days: ", 1, 31).unwrap(), 12);

        let out = printed(&p);
        assert!(out.contains("Please enter a valid number."));
        assert!(out.contains("Enter a number between 1 and 31"));
        assert_eq!(out.matches("Days: ").count(), 3);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut p = prompter("0\n31\n");
        assert_eq!(p.int_in_range("", 0, 31).unwrap(), 0);
        assert_eq!(p.int_in_range("", 0, 31).unwrap(), 31);
    }

    #[test]
    fn test_negative_is_not_a_number() {
        let mut p = prompter("-3\n2\n");
        assert_eq!(p.choice("", 1, 4).unwrap(), 2);
        assert!(printed(&p).contains("Please enter a valid number"));
    }

    #[test]
    fn test_closed_input_is_error() {
        let mut p = prompter("x\n");
        assert!(p.choice("", 1, 10).is_err());
    }

    #[test]
    fn test_month_selection() {
        let mut p = prompter("13\n9\n");
        assert_eq!(p.month().unwrap(), Month::September);
        let out = printed(&p);
        assert!(out.contains("  12. December"));
        assert!(out.contains("Choose between 1 and 12"));
    }

    #[test]
    fn test_day_input() {
        let mut p = prompter("x\nh\n");
        assert_eq!(p.day_input(3).unwrap(), DayInput::Holiday);
        let out = printed(&p);
        assert!(out.contains("Day  3: "));
        assert!(out.contains("Enter P, A, or H"));
    }
}
