use quill_language::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellToken {
	IntegerLiteral,
	DoubleLiteral,

	Break,
	Case,
	Continue,
	Echo,
	Esac,
	Eval,
	Elif,
	Else,
	Exit,
	Exec,
	Export,
	Done,
	Do,
	Fi,
	For,
	In,
	Function,
	If,
	Set,
	Select,
	Shift,
	Trap,
	Then,
	Ulimit,
	Umask,
	Unset,
	Until,
	Wait,
	While,
	Let,
	Local,
	Read,
	Readonly,
	Return,
	Test,

	True,
	False,

	MultEq,
	DivEq,
	ModEq,
	PlusEq,
	MinusEq,
	ShiftRightEq,
	ShiftLeftEq,
	BitAndEq,
	BitOrEq,
	BitXorEq,
	NotEq,
	EqEq,
	Regexp,
	GtEq,
	LtEq,

	PlusPlus,
	MinusMinus,
	Exponent,

	Bang,
	Tilde,
	Plus,
	Minus,
	Mult,
	Div,
	Mod,

	ShiftLeft,
	ShiftRight,
	Lt,
	Gt,

	AndAnd,
	OrOr,
	And,
	Xor,
	Or,
	Dollar,
	Eq,
	Backtick,
	Quest,
	Colon,

	LParen,
	RParen,
	LBrace,
	RBrace,
	LBrack,
	RBrack,
	Semicolon,
	Comma,
	Dot,

	/// Raw text between backticks.
	EvalContent,

	Shebang,
	Comment,

	DoubleQuotedString,
	SingleQuotedString,
	/// Backslash followed by the escaped character.
	Escape,
	/// Here-document body, up to and including its delimiter line.
	HeredocBody,

	Identifier,
	Whitespace,
	BadCharacter,
	Eof,
}

impl ShellToken {
	/// Reserved word or builtin for an identifier lexeme.
	pub fn keyword(ident: &str) -> Option<ShellToken> {
		use ShellToken::*;
		Some(match ident {
			"break" => Break,
			"case" => Case,
			"continue" => Continue,
			"echo" => Echo,
			"esac" => Esac,
			"eval" => Eval,
			"elif" => Elif,
			"else" => Else,
			"exit" => Exit,
			"exec" => Exec,
			"export" => Export,
			"done" => Done,
			"do" => Do,
			"fi" => Fi,
			"for" => For,
			"in" => In,
			"function" => Function,
			"if" => If,
			"set" => Set,
			"select" => Select,
			"shift" => Shift,
			"trap" => Trap,
			"then" => Then,
			"ulimit" => Ulimit,
			"umask" => Umask,
			"unset" => Unset,
			"until" => Until,
			"wait" => Wait,
			"while" => While,
			"let" => Let,
			"local" => Local,
			"read" => Read,
			"readonly" => Readonly,
			"return" => Return,
			"test" => Test,
			"true" => True,
			"false" => False,
			_ => return None,
		})
	}

	pub fn is_keyword(self) -> bool {
		use ShellToken::*;
		matches!(
			self,
			Break
				| Case | Continue
				| Echo | Esac
				| Eval | Elif
				| Else | Exit
				| Exec | Export
				| Done | Do
				| Fi | For
				| In | Function
				| If | Set
				| Select | Shift
				| Trap | Then
				| Ulimit | Umask
				| Unset | Until
				| Wait | While
				| Let | Local
				| Read | Readonly
				| Return | Test
		)
	}

	pub fn is_operator(self) -> bool {
		use ShellToken::*;
		matches!(
			self,
			MultEq
				| DivEq | ModEq
				| PlusEq | MinusEq
				| ShiftRightEq | ShiftLeftEq
				| BitAndEq | BitOrEq
				| BitXorEq | NotEq
				| EqEq | Regexp
				| GtEq | LtEq
				| PlusPlus | MinusMinus
				| Exponent | Bang
				| Tilde | Plus
				| Minus | Mult
				| Div | Mod
				| ShiftLeft | ShiftRight
				| Lt | Gt
				| AndAnd | OrOr
				| And | Xor
				| Or | Dollar
				| Eq | Backtick
				| Quest | Colon
		)
	}
}

impl TokenKind for ShellToken {
	const BAD_CHARACTER: Self = ShellToken::BadCharacter;
	const EOF: Self = ShellToken::Eof;

	fn is_trivia(self) -> bool {
		matches!(self, Self::Whitespace | Self::Comment | Self::Shebang)
	}
}

/// Operator and punctuation lexemes, resolved by longest match.
pub(crate) const OPERATORS: &[(&str, ShellToken)] = &[
	("*=", ShellToken::MultEq),
	("/=", ShellToken::DivEq),
	("%=", ShellToken::ModEq),
	("+=", ShellToken::PlusEq),
	("-=", ShellToken::MinusEq),
	(">>=", ShellToken::ShiftRightEq),
	("<<=", ShellToken::ShiftLeftEq),
	("&=", ShellToken::BitAndEq),
	("|=", ShellToken::BitOrEq),
	("^=", ShellToken::BitXorEq),
	("!=", ShellToken::NotEq),
	("==", ShellToken::EqEq),
	("=~", ShellToken::Regexp),
	(">=", ShellToken::GtEq),
	("<=", ShellToken::LtEq),
	("++", ShellToken::PlusPlus),
	("--", ShellToken::MinusMinus),
	("**", ShellToken::Exponent),
	("!", ShellToken::Bang),
	("~", ShellToken::Tilde),
	("+", ShellToken::Plus),
	("-", ShellToken::Minus),
	("*", ShellToken::Mult),
	("/", ShellToken::Div),
	("%", ShellToken::Mod),
	("<<", ShellToken::ShiftLeft),
	(">>", ShellToken::ShiftRight),
	("<", ShellToken::Lt),
	(">", ShellToken::Gt),
	("&&", ShellToken::AndAnd),
	("||", ShellToken::OrOr),
	("&", ShellToken::And),
	("^", ShellToken::Xor),
	("|", ShellToken::Or),
	("$", ShellToken::Dollar),
	("=", ShellToken::Eq),
	("?", ShellToken::Quest),
	(":", ShellToken::Colon),
	("(", ShellToken::LParen),
	(")", ShellToken::RParen),
	("{", ShellToken::LBrace),
	("}", ShellToken::RBrace),
	("[", ShellToken::LBrack),
	("]", ShellToken::RBrack),
	(";", ShellToken::Semicolon),
	(",", ShellToken::Comma),
	(".", ShellToken::Dot),
];
