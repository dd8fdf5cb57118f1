//! The standard keyword sets of the Aru assembly language.
//!
//! These are the names the [`TokenTable`](crate::TokenTable) is seeded with.
//! The typed enums let later phases work with a directive, mnemonic or
//! register without comparing strings again.

/// Defines a fieldless keyword enum with its source spelling.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $text:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(#[doc = concat!("`", $text, "`")] $variant,)*
        }

        impl $name {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// The lowercase source spelling.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }

            /// Looks a keyword up by spelling, ignoring ASCII case.
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|keyword| keyword.name().eq_ignore_ascii_case(name))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

keyword_enum! {
    /// A `.`-prefixed assembler directive.
    pub enum Directive {
        Data => "data",
        Const => "const",
        Bss => "bss",
        Text => "text",
        Evt => "evt",
        Ivt => "ivt",
        Set => "set",
        Glob => "glob",
        End => "end",
        String => "string",
        Byte => "byte",
        Hword => "hword",
        Word => "word",
        Float => "float",
        Zero => "zero",
        Fill => "fill",
        Align => "align",
        Size => "size",
        Extern => "extern",
        Type => "type",
        Sizeof => "sizeof",
        Def => "def",
        Include => "include",
        Typeinfo => "typeinfo",
        Offset => "offset",
    }
}

impl Directive {
    /// Returns true for the directives that switch the active section.
    pub const fn is_section(self) -> bool {
        matches!(
            self,
            Directive::Data
                | Directive::Const
                | Directive::Bss
                | Directive::Text
                | Directive::Evt
                | Directive::Ivt
        )
    }

    /// Returns true for the directives that emit data into the current section.
    pub const fn is_data(self) -> bool {
        matches!(
            self,
            Directive::String
                | Directive::Byte
                | Directive::Hword
                | Directive::Word
                | Directive::Float
                | Directive::Zero
                | Directive::Fill
                | Directive::Align
        )
    }
}

/// Instruction encoding formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstrFormat {
    /// Register or immediate second operand.
    IR,
    /// Immediate only.
    I,
    /// Register only.
    R,
    /// Memory access.
    M,
    /// Branch to an immediate target.
    Bi,
    /// Branch to a register target.
    Bu,
    /// Conditional branch.
    Bc,
    /// System and special-register instructions.
    S,
}

keyword_enum! {
    /// An instruction mnemonic.
    pub enum Mnemonic {
        Add => "add",
        Adds => "adds",
        Sub => "sub",
        Subs => "subs",
        Or => "or",
        And => "and",
        Xor => "xor",
        Not => "not",
        Lsl => "lsl",
        Lsr => "lsr",
        Asr => "asr",
        Cmp => "cmp",
        Mv => "mv",
        Mvn => "mvn",
        Nop => "nop",
        Mul => "mul",
        Smul => "smul",
        Div => "div",
        Sdiv => "sdiv",
        Ld => "ld",
        Ldb => "ldb",
        Ldbs => "ldbs",
        Ldbz => "ldbz",
        Ldh => "ldh",
        Ldhs => "ldhs",
        Ldhz => "ldhz",
        Str => "str",
        Strb => "strb",
        Strh => "strh",
        Ub => "ub",
        Call => "call",
        Ubr => "ubr",
        Ret => "ret",
        B => "b",
        Syscall => "syscall",
        Hlt => "hlt",
        Si => "si",
        Di => "di",
        Eret => "eret",
        Ldir => "ldir",
        Mvcstr => "mvcstr",
        Ldcstr => "ldcstr",
        Resr => "resr",
    }
}

impl Mnemonic {
    /// The encoding format of this instruction.
    pub const fn format(self) -> InstrFormat {
        use Mnemonic::*;
        match self {
            Add | Adds | Sub | Subs | Or | And | Xor | Not | Lsl | Lsr | Asr | Cmp | Mv | Mvn => {
                InstrFormat::IR
            },
            Nop => InstrFormat::I,
            Mul | Smul | Div | Sdiv => InstrFormat::R,
            Ld | Ldb | Ldbs | Ldbz | Ldh | Ldhs | Ldhz | Str | Strb | Strh => InstrFormat::M,
            Ub | Call => InstrFormat::Bi,
            Ubr | Ret => InstrFormat::Bu,
            B => InstrFormat::Bc,
            Syscall | Hlt | Si | Di | Eret | Ldir | Mvcstr | Ldcstr | Resr => InstrFormat::S,
        }
    }
}

/// Register names with their architectural register number.
///
/// ABI aliases share a number with their `x` register. `ir` is a special
/// register outside the general-purpose file and has no number.
#[rustfmt::skip]
pub const REGISTERS: &[(&str, Option<u8>)] = &[
    ("x0", Some(0)), ("x1", Some(1)), ("x2", Some(2)), ("x3", Some(3)),
    ("x4", Some(4)), ("x5", Some(5)), ("x6", Some(6)), ("x7", Some(7)),
    ("x8", Some(8)), ("x9", Some(9)), ("x10", Some(10)), ("x11", Some(11)),
    ("x12", Some(12)), ("x13", Some(13)), ("x14", Some(14)), ("x15", Some(15)),
    ("x16", Some(16)), ("x17", Some(17)), ("x18", Some(18)), ("x19", Some(19)),
    ("x20", Some(20)), ("x21", Some(21)), ("x22", Some(22)), ("x23", Some(23)),
    ("x24", Some(24)), ("x25", Some(25)), ("x26", Some(26)), ("x27", Some(27)),
    ("x28", Some(28)), ("x29", Some(29)), ("x30", Some(30)), ("x31", Some(31)),
    ("sp", Some(31)),
    ("xr", Some(0)),
    ("a0", Some(0)), ("a1", Some(1)), ("a2", Some(2)), ("a3", Some(3)), ("a4", Some(4)),
    ("a5", Some(5)), ("a6", Some(6)), ("a7", Some(7)), ("a8", Some(8)), ("a9", Some(9)),
    ("c0", Some(12)), ("c1", Some(13)), ("c2", Some(14)), ("c3", Some(15)), ("c4", Some(16)),
    ("s0", Some(17)), ("s1", Some(18)), ("s2", Some(19)), ("s3", Some(20)), ("s4", Some(21)),
    ("s5", Some(22)), ("s6", Some(23)), ("s7", Some(24)), ("s8", Some(25)), ("s9", Some(26)),
    ("s10", Some(27)),
    ("lr", Some(28)),
    ("xb", Some(29)),
    ("xz", Some(30)),
    ("ir", None),
];

/// A register name recognized by the assembler.
///
/// # Examples
///
/// ```
/// use arxsm_lex::keywords::Register;
///
/// let lr = Register::from_name("LR").unwrap();
/// assert_eq!(lr.name(), "lr");
/// assert_eq!(lr.number(), Some(28));
/// assert_eq!(Register::from_name("ir").and_then(Register::number), None);
/// assert!(Register::from_name("x32").is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Register {
    name: &'static str,
    number: Option<u8>,
}

impl Register {
    /// Looks a register up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        REGISTERS
            .iter()
            .find(|(reg, _)| reg.eq_ignore_ascii_case(name))
            .map(|&(name, number)| Register { name, number })
    }

    /// Every register, in table order.
    pub fn all() -> impl Iterator<Item = Register> {
        REGISTERS.iter().map(|&(name, number)| Register { name, number })
    }

    /// The lowercase register name.
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// The architectural register number, if the register has one.
    pub const fn number(self) -> Option<u8> {
        self.number
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// The reserved words introduced by `!`, without the sigil.
pub const MACRO_KEYWORD: &str = "macro";
/// See [`MACRO_KEYWORD`].
pub const OUT_KEYWORD: &str = "out";
/// See [`MACRO_KEYWORD`].
pub const IF_KEYWORD: &str = "if";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_lookup() {
        assert_eq!(Directive::from_name("def"), Some(Directive::Def));
        assert_eq!(Directive::from_name("TYPE"), Some(Directive::Type));
        assert_eq!(Directive::from_name("foo"), None);
        assert_eq!(Directive::ALL.len(), 25);
    }

    #[test]
    fn test_directive_groups() {
        assert!(Directive::Text.is_section());
        assert!(!Directive::Def.is_section());
        assert!(Directive::Word.is_data());
        assert!(!Directive::Type.is_data());
    }

    #[test]
    fn test_mnemonic_formats() {
        assert_eq!(Mnemonic::Add.format(), InstrFormat::IR);
        assert_eq!(Mnemonic::Nop.format(), InstrFormat::I);
        assert_eq!(Mnemonic::Sdiv.format(), InstrFormat::R);
        assert_eq!(Mnemonic::Strh.format(), InstrFormat::M);
        assert_eq!(Mnemonic::Call.format(), InstrFormat::Bi);
        assert_eq!(Mnemonic::Ret.format(), InstrFormat::Bu);
        assert_eq!(Mnemonic::B.format(), InstrFormat::Bc);
        assert_eq!(Mnemonic::Resr.format(), InstrFormat::S);
        assert_eq!(Mnemonic::ALL.len(), 43);
    }

    #[test]
    fn test_register_aliases_share_numbers() {
        let number = |name| Register::from_name(name).and_then(Register::number);
        assert_eq!(number("a0"), number("x0"));
        assert_eq!(number("xr"), Some(0));
        assert_eq!(number("c0"), Some(12));
        assert_eq!(number("s10"), Some(27));
        assert_eq!(number("sp"), Some(31));
        assert!(Register::from_name("ir").is_some());
        assert!(Register::from_name("x32").is_none());
        assert_eq!(Register::all().count(), REGISTERS.len());
    }

    #[test]
    fn test_register_names_are_unique() {
        for (i, (a, _)) in REGISTERS.iter().enumerate() {
            for (b, _) in &REGISTERS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
