use std::fmt;

const LOWER_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGIT_CHARS: &str = "0123456789";
const SYMBOL_CHARS: &str = "~`!@#$%^&*()-_+={}[]|/:;\"<>,.?";

/// A family of characters that can be toggled on the form.
///
/// The declaration order is the order in which classes are concatenated
/// into an alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
	Lower,
	Upper,
	Digit,
	Symbol,
}

impl CharClass {
	/// Every class, in alphabet order.
	pub const ALL: [CharClass; 4] = [
		CharClass::Lower,
		CharClass::Upper,
		CharClass::Digit,
		CharClass::Symbol,
	];

	/// Returns the reference characters of this class.
	pub fn chars(self) -> &'static str {
		match self {
			CharClass::Lower => LOWER_CHARS,
			CharClass::Upper => UPPER_CHARS,
			CharClass::Digit => DIGIT_CHARS,
			CharClass::Symbol => SYMBOL_CHARS,
		}
	}

	/// Label shown next to the toggle on the form.
	pub fn label(self) -> &'static str {
		match self {
			CharClass::Lower => "Include Lower Case",
			CharClass::Upper => "Include Upper Case",
			CharClass::Digit => "Include Numbers",
			CharClass::Symbol => "Include Symbols",
		}
	}

	/// Returns `true` if `c` belongs to this class.
	pub fn contains(self, c: char) -> bool {
		self.chars().contains(c)
	}
}

impl fmt::Display for CharClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			CharClass::Lower => "lower",
			CharClass::Upper => "upper",
			CharClass::Digit => "digit",
			CharClass::Symbol => "symbol",
		};
		f.write_str(name)
	}
}

/// The four class toggles of the form.
///
/// # Invariants
/// - The default selection is lower-case only, which is also what a
///   form reset restores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharClasses {
	pub lower: bool,
	pub upper: bool,
	pub digit: bool,
	pub symbol: bool,
}

impl Default for CharClasses {
	fn default() -> Self {
		Self {
			lower: true,
			upper: false,
			digit: false,
			symbol: false,
		}
	}
}

impl CharClasses {
	/// A selection with every class disabled.
	pub fn none() -> Self {
		Self {
			lower: false,
			upper: false,
			digit: false,
			symbol: false,
		}
	}

	/// Builds a selection enabling exactly the given classes.
	pub fn from_classes<I: IntoIterator<Item = CharClass>>(classes: I) -> Self {
		let mut selection = Self::none();
		for class in classes {
			selection.set(class, true);
		}
		selection
	}

	pub fn is_enabled(&self, class: CharClass) -> bool {
		match class {
			CharClass::Lower => self.lower,
			CharClass::Upper => self.upper,
			CharClass::Digit => self.digit,
			CharClass::Symbol => self.symbol,
		}
	}

	pub fn set(&mut self, class: CharClass, enabled: bool) {
		let flag = match class {
			CharClass::Lower => &mut self.lower,
			CharClass::Upper => &mut self.upper,
			CharClass::Digit => &mut self.digit,
			CharClass::Symbol => &mut self.symbol,
		};
		*flag = enabled;
	}

	pub fn toggle(&mut self, class: CharClass) {
		self.set(class, !self.is_enabled(class));
	}

	/// Enabled classes, in alphabet order.
	pub fn enabled(&self) -> impl Iterator<Item = CharClass> + '_ {
		CharClass::ALL.into_iter().filter(move |class| self.is_enabled(*class))
	}

	/// Returns `true` if no class is enabled.
	pub fn is_empty(&self) -> bool {
		self.enabled().next().is_none()
	}

	/// Concatenates the enabled classes into an alphabet.
	///
	/// Never fails: an empty selection yields an empty alphabet and the
	/// decision is left to the sampler.
	pub fn alphabet(&self) -> Alphabet {
		Alphabet::new(self)
	}
}

/// Ordered sampling universe built from a class selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
	chars: Vec<char>,
}

impl Alphabet {
	/// Concatenates, in class order, the characters of each enabled class.
	pub fn new(classes: &CharClasses) -> Self {
		let chars = classes.enabled().flat_map(|class| class.chars().chars()).collect();
		Self { chars }
	}

	pub fn len(&self) -> usize {
		self.chars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chars.is_empty()
	}

	pub fn contains(&self, c: char) -> bool {
		self.chars.contains(&c)
	}

	pub fn as_slice(&self) -> &[char] {
		&self.chars
	}
}

impl fmt::Display for Alphabet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.chars.iter().try_for_each(|c| write!(f, "{c}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reference_class_sizes() {
		assert_eq!(CharClass::Lower.chars().chars().count(), 26);
		assert_eq!(CharClass::Upper.chars().chars().count(), 26);
		assert_eq!(CharClass::Digit.chars().chars().count(), 10);
		assert_eq!(CharClass::Symbol.chars().chars().count(), 30);
		assert!(CharClass::Upper.contains('Z'));
	}

	#[test]
	fn default_selection_is_lower_only() {
		let classes = CharClasses::default();
		assert_eq!(classes.enabled().collect::<Vec<_>>(), vec![CharClass::Lower]);
	}

	#[test]
	fn alphabet_follows_class_order() {
		let classes = CharClasses::from_classes([CharClass::Symbol, CharClass::Lower, CharClass::Digit]);
		let expected = format!("{LOWER_CHARS}{DIGIT_CHARS}{SYMBOL_CHARS}");
		assert_eq!(classes.alphabet().to_string(), expected);
		assert_eq!(classes.alphabet().len(), 66);
	}

	#[test]
	fn empty_selection_builds_empty_alphabet() {
		let classes = CharClasses::none();
		assert!(classes.is_empty());
		assert!(classes.alphabet().is_empty());
	}

	#[test]
	fn toggle_flips_a_single_class() {
		let mut classes = CharClasses::default();
		classes.toggle(CharClass::Digit);
		classes.toggle(CharClass::Lower);
		assert!(classes.digit);
		assert!(!classes.lower);
		assert!(!classes.upper);
		assert!(!classes.symbol);
	}

	#[test]
	fn classes_do_not_overlap() {
		for a in CharClass::ALL {
			for b in CharClass::ALL {
				if a != b {
					assert!(!a.chars().chars().any(|c| b.contains(c)), "{a} overlaps {b}");
				}
			}
		}
	}
}
