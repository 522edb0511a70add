use super::Position;

/// Character cursor over a source string with exact line/column tracking.
///
/// Tokenizers drive a `Scanner` one token at a time; the shared driver in
/// [`Tokens`](super::Tokens) slices lexemes and records positions, so grammar
/// code only decides how many characters belong to the current token.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
	src: &'a str,
	offset: usize,
	pos: Position,
	prev: Option<char>,
}

impl<'a> Scanner<'a> {
	pub fn new(src: &'a str) -> Self {
		Self {
			src,
			offset: 0,
			pos: Position::START,
			prev: None,
		}
	}

	/// Returns the full source being scanned.
	#[inline]
	pub fn source(&self) -> &'a str {
		self.src
	}

	/// Byte offset of the next unconsumed character.
	#[inline]
	pub fn offset(&self) -> usize {
		self.offset
	}

	/// Location of the next unconsumed character.
	#[inline]
	pub fn position(&self) -> Position {
		self.pos
	}

	#[inline]
	pub fn is_eof(&self) -> bool {
		self.offset >= self.src.len()
	}

	/// Unconsumed remainder of the source.
	#[inline]
	pub fn rest(&self) -> &'a str {
		&self.src[self.offset..]
	}

	#[inline]
	pub fn peek(&self) -> Option<char> {
		self.rest().chars().next()
	}

	/// Looks `n` characters past the next one (`peek_nth(0) == peek()`).
	pub fn peek_nth(&self, n: usize) -> Option<char> {
		self.rest().chars().nth(n)
	}

	/// The most recently consumed character, across token boundaries.
	#[inline]
	pub fn prev(&self) -> Option<char> {
		self.prev
	}

	#[inline]
	pub fn starts_with(&self, s: &str) -> bool {
		self.rest().starts_with(s)
	}

	/// Consumes one character.
	pub fn bump(&mut self) -> Option<char> {
		let c = self.peek()?;
		self.offset += c.len_utf8();
		if c == '\n' {
			self.pos.line += 1;
			self.pos.column = 1;
		} else {
			self.pos.column += 1;
		}
		self.prev = Some(c);
		Some(c)
	}

	/// Consumes `c` if it is next.
	pub fn eat(&mut self, c: char) -> bool {
		if self.peek() == Some(c) {
			self.bump();
			true
		} else {
			false
		}
	}

	/// Consumes the next character if it satisfies `pred`.
	pub fn eat_if(&mut self, pred: impl FnOnce(char) -> bool) -> Option<char> {
		match self.peek() {
			Some(c) if pred(c) => self.bump(),
			_ => None,
		}
	}

	/// Consumes characters while `pred` holds, returning how many were eaten.
	pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
		let mut n = 0;
		while self.eat_if(&mut pred).is_some() {
			n += 1;
		}
		n
	}

	/// Consumes `s` if the remainder starts with it.
	pub fn eat_str(&mut self, s: &str) -> bool {
		if !self.starts_with(s) {
			return false;
		}
		for _ in s.chars() {
			self.bump();
		}
		true
	}

	/// Consumes everything up to (not including) the next newline.
	pub fn eat_line(&mut self) {
		self.eat_while(|c| c != '\n');
	}

	/// Longest-match lookup over an operator table.
	///
	/// Every entry whose lexeme prefixes the remainder is a candidate; the
	/// longest one is consumed and its kind returned, so `<<=` beats `<<`
	/// beats `<` regardless of table order.
	pub fn eat_longest<K: Copy>(&mut self, table: &[(&str, K)]) -> Option<K> {
		let rest = self.rest();
		let (lexeme, kind) = table
			.iter()
			.filter(|(lexeme, _)| rest.starts_with(lexeme))
			.max_by_key(|(lexeme, _)| lexeme.len())?;
		self.eat_str(lexeme);
		Some(*kind)
	}

	/// Source text from `start` up to the current offset.
	#[inline]
	pub fn slice_from(&self, start: usize) -> &'a str {
		&self.src[start..self.offset]
	}
}
