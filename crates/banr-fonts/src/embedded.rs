//! The embedded glyph and border tables
//!
//! Stroke art is decorative; only the coverage and the equal-width row
//! invariant are contractual. Every font carries a space glyph - it is
//! also the fallback for characters outside the table.

use banr_core::types::BorderStyle;

pub(crate) type GlyphTable = &'static [(char, &'static [&'static str])];

/// The default font: 5x5 block capitals, digits included
pub(crate) const STANDARD: GlyphTable = &[
    ('A', &["  A  ", " A A ", "AAAAA", "A   A", "A   A"]),
    ('B', &["BBBB ", "B   B", "BBBB ", "B   B", "BBBB "]),
    ('C', &[" CCC ", "C   C", "C    ", "C   C", " CCC "]),
    ('D', &["DDD  ", "D  D ", "D   D", "D  D ", "DDD  "]),
    ('E', &["EEEEE", "E    ", "EEE  ", "E    ", "EEEEE"]),
    ('F', &["FFFFF", "F    ", "FFF  ", "F    ", "F    "]),
    ('G', &[" GGG ", "G   G", "G GGG", "G   G", " GGG "]),
    ('H', &["H   H", "H   H", "HHHHH", "H   H", "H   H"]),
    ('I', &["IIIII", "  I  ", "  I  ", "  I  ", "IIIII"]),
    ('J', &["JJJJJ", "   J ", "   J ", "J  J ", " JJ  "]),
    ('K', &["K   K", "K  K ", "KKK  ", "K  K ", "K   K"]),
    ('L', &["L    ", "L    ", "L    ", "L    ", "LLLLL"]),
    ('M', &["M   M", "MM MM", "M M M", "M   M", "M   M"]),
    ('N', &["N   N", "NN  N", "N N N", "N  NN", "N   N"]),
    ('O', &[" OOO ", "O   O", "O   O", "O   O", " OOO "]),
    ('P', &["PPPP ", "P   P", "PPPP ", "P    ", "P    "]),
    ('Q', &[" QQQ ", "Q   Q", "Q   Q", "Q  QQ", " QQQQ"]),
    ('R', &["RRRR ", "R   R", "RRRR ", "R  R ", "R   R"]),
    ('S', &[" SSS ", "S   S", " SSS ", "    S", " SSS "]),
    ('T', &["TTTTT", "  T  ", "  T  ", "  T  ", "  T  "]),
    ('U', &["U   U", "U   U", "U   U", "U   U", " UUU "]),
    ('V', &["V   V", "V   V", "V   V", " V V ", "  V  "]),
    ('W', &["W   W", "W   W", "W W W", "WW WW", "W   W"]),
    ('X', &["X   X", " X X ", "  X  ", " X X ", "X   X"]),
    ('Y', &["Y   Y", " Y Y ", "  Y  ", "  Y  ", "  Y  "]),
    ('Z', &["ZZZZZ", "   Z ", "  Z  ", " Z   ", "ZZZZZ"]),
    (' ', &["     ", "     ", "     ", "     ", "     "]),
    ('0', &[" 000 ", "0  00", "0 0 0", "00  0", " 000 "]),
    ('1', &["  1  ", " 11  ", "  1  ", "  1  ", "11111"]),
    ('2', &[" 222 ", "2   2", "   2 ", "  2  ", "22222"]),
    ('3', &[" 333 ", "3   3", "  33 ", "3   3", " 333 "]),
    ('4', &["   4 ", "  44 ", " 4 4 ", "44444", "   4 "]),
    ('5', &["55555", "5    ", "5555 ", "    5", "5555 "]),
    ('6', &[" 666 ", "6    ", "6666 ", "6   6", " 666 "]),
    ('7', &["77777", "   7 ", "  7  ", " 7   ", "7    "]),
    ('8', &[" 888 ", "8   8", " 888 ", "8   8", " 888 "]),
    ('9', &[" 999 ", "9   9", " 9999", "    9", " 999 "]),
];

/// Hash-mark capitals, partial alphabet
pub(crate) const BANNER: GlyphTable = &[
    ('A', &["  #  ", " # # ", "#   #", "#####", "#   #"]),
    ('B', &["#### ", "#   #", "#### ", "#   #", "#### "]),
    ('C', &[" ### ", "#   #", "#    ", "#   #", " ### "]),
    ('D', &["###  ", "#  # ", "#   #", "#  # ", "###  "]),
    ('E', &["#####", "#    ", "###  ", "#    ", "#####"]),
    (' ', &["     ", "     ", "     ", "     ", "     "]),
];

/// Three-row miniature glyphs, partial alphabet
pub(crate) const SMALL: GlyphTable = &[
    ('A', &[" _ ", "/_\\", "   "]),
    ('B', &["_  ", "|_)", "/_ "]),
    ('C', &[" _ ", "|  ", "\\_/"]),
    (' ', &["   ", "   ", "   "]),
];

/// The frame-drawing character sets
pub(crate) const BORDERS: &[(&str, BorderStyle)] = &[
    (
        "plain",
        BorderStyle {
            horizontal: '-',
            vertical: '|',
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
        },
    ),
    (
        "fancy",
        BorderStyle {
            horizontal: '═',
            vertical: '║',
            top_left: '╔',
            top_right: '╗',
            bottom_left: '╚',
            bottom_right: '╝',
        },
    ),
    (
        "round",
        BorderStyle {
            horizontal: '─',
            vertical: '│',
            top_left: '╭',
            top_right: '╮',
            bottom_left: '╰',
            bottom_right: '╯',
        },
    ),
];
