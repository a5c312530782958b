//! Built-in remap table data.
//!
//! Each table is a flat list of `(input, needs_shift, output)` rules consumed
//! by [`CharacterRemapTable`](super::CharacterRemapTable).  The rules encode a
//! layout-compatibility fix-up whose rationale lies with the peer's keyboard
//! layout, not with this crate; they are kept exactly as shipped.  Entries
//! that look inconsistent (e.g. `"` sent as `2` under Shift) are intentional
//! data, not bugs to correct here.
//!
//! Changing a table changes what peers receive: treat edits as a data
//! version bump and cover them with a test.

use super::RemapEntry;

/// Mode 0: shifted ASCII symbols and capitals are sent with Shift held.
pub const MODE0: &[RemapEntry] = &[
    RemapEntry::shifted(33, 33), // ! -> !
    RemapEntry::shifted(34, 34), // " -> "
    RemapEntry::shifted(35, 35), // # -> #
    RemapEntry::shifted(36, 36), // $ -> $
    RemapEntry::shifted(37, 37), // % -> %
    RemapEntry::shifted(38, 38), // & -> &
    RemapEntry::shifted(40, 40), // ( -> (
    RemapEntry::shifted(41, 41), // ) -> )
    RemapEntry::shifted(42, 42), // * -> *
    RemapEntry::shifted(43, 43), // + -> +
    RemapEntry::shifted(58, 58), // : -> :
    RemapEntry::shifted(60, 60), // < -> <
    RemapEntry::shifted(62, 62), // > -> >
    RemapEntry::shifted(63, 63), // ? -> ?
    RemapEntry::shifted(64, 64), // @ -> @
    RemapEntry::shifted(65, 65), // A -> A
    RemapEntry::shifted(66, 66), // B -> B
    RemapEntry::shifted(67, 67), // C -> C
    RemapEntry::shifted(68, 68), // D -> D
    RemapEntry::shifted(69, 69), // E -> E
    RemapEntry::shifted(70, 70), // F -> F
    RemapEntry::shifted(71, 71), // G -> G
    RemapEntry::shifted(72, 72), // H -> H
    RemapEntry::shifted(73, 73), // I -> I
    RemapEntry::shifted(74, 74), // J -> J
    RemapEntry::shifted(75, 75), // K -> K
    RemapEntry::shifted(76, 76), // L -> L
    RemapEntry::shifted(77, 77), // M -> M
    RemapEntry::shifted(78, 78), // N -> N
    RemapEntry::shifted(79, 79), // O -> O
    RemapEntry::shifted(80, 80), // P -> P
    RemapEntry::shifted(81, 81), // Q -> Q
    RemapEntry::shifted(82, 82), // R -> R
    RemapEntry::shifted(83, 83), // S -> S
    RemapEntry::shifted(84, 84), // T -> T
    RemapEntry::shifted(85, 85), // U -> U
    RemapEntry::shifted(86, 86), // V -> V
    RemapEntry::shifted(87, 87), // W -> W
    RemapEntry::shifted(88, 88), // X -> X
    RemapEntry::shifted(89, 89), // Y -> Y
    RemapEntry::shifted(90, 90), // Z -> Z
    RemapEntry::shifted(94, 94), // ^ -> ^
    RemapEntry::shifted(95, 95), // _ -> _
    RemapEntry::shifted(123, 123), // { -> {
    RemapEntry::shifted(124, 124), // | -> |
    RemapEntry::shifted(125, 125), // } -> }
    RemapEntry::shifted(126, 126), // ~ -> ~
];

/// Mode 1: symbols moved to other positions, some with Shift.  Lowercase
/// letters are sent as their uppercase keysym.
pub const MODE1: &[RemapEntry] = &[
    RemapEntry::shifted(33, 33), // ! -> !
    RemapEntry::shifted(34, 50), // " -> 2
    RemapEntry::shifted(35, 35), // # -> #
    RemapEntry::shifted(36, 36), // $ -> $
    RemapEntry::shifted(37, 37), // % -> %
    RemapEntry::shifted(38, 54), // & -> 6
    RemapEntry::shifted(39, 38), // ' -> &
    RemapEntry::shifted(40, 42), // ( -> *
    RemapEntry::shifted(41, 40), // ) -> (
    RemapEntry::shifted(42, 34), // * -> "
    RemapEntry::shifted(43, 58), // + -> :
    RemapEntry::plain(44, 44), // , -> ,
    RemapEntry::plain(45, 45), // - -> -
    RemapEntry::plain(46, 46), // . -> .
    RemapEntry::plain(47, 47), // / -> /
    RemapEntry::plain(48, 41), // 0 -> )
    RemapEntry::plain(49, 33), // 1 -> !
    RemapEntry::plain(50, 50), // 2 -> 2
    RemapEntry::plain(51, 35), // 3 -> #
    RemapEntry::plain(52, 36), // 4 -> $
    RemapEntry::plain(53, 37), // 5 -> %
    RemapEntry::plain(54, 54), // 6 -> 6
    RemapEntry::plain(55, 38), // 7 -> &
    RemapEntry::plain(56, 42), // 8 -> *
    RemapEntry::plain(57, 40), // 9 -> (
    RemapEntry::plain(58, 34), // : -> "
    RemapEntry::plain(59, 58), // ; -> :
    RemapEntry::shifted(60, 44), // < -> ,
    RemapEntry::shifted(61, 45), // = -> -
    RemapEntry::shifted(62, 46), // > -> .
    RemapEntry::shifted(63, 47), // ? -> /
    RemapEntry::plain(64, 91), // @ -> [
    RemapEntry::shifted(65, 65), // A -> A
    RemapEntry::shifted(66, 66), // B -> B
    RemapEntry::shifted(67, 67), // C -> C
    RemapEntry::shifted(68, 68), // D -> D
    RemapEntry::shifted(69, 69), // E -> E
    RemapEntry::shifted(70, 70), // F -> F
    RemapEntry::shifted(71, 71), // G -> G
    RemapEntry::shifted(72, 72), // H -> H
    RemapEntry::shifted(73, 73), // I -> I
    RemapEntry::shifted(74, 74), // J -> J
    RemapEntry::shifted(75, 75), // K -> K
    RemapEntry::shifted(76, 76), // L -> L
    RemapEntry::shifted(77, 77), // M -> M
    RemapEntry::shifted(78, 78), // N -> N
    RemapEntry::shifted(79, 79), // O -> O
    RemapEntry::shifted(80, 80), // P -> P
    RemapEntry::shifted(81, 81), // Q -> Q
    RemapEntry::shifted(82, 82), // R -> R
    RemapEntry::shifted(83, 83), // S -> S
    RemapEntry::shifted(84, 84), // T -> T
    RemapEntry::shifted(85, 85), // U -> U
    RemapEntry::shifted(86, 86), // V -> V
    RemapEntry::shifted(87, 87), // W -> W
    RemapEntry::shifted(88, 88), // X -> X
    RemapEntry::shifted(89, 89), // Y -> Y
    RemapEntry::shifted(90, 90), // Z -> Z
    RemapEntry::plain(91, 93), // [ -> ]
    RemapEntry::plain(93, 92), // ] -> \
    RemapEntry::plain(94, 43), // ^ -> +
    RemapEntry::plain(96, 96), // ` -> `
    RemapEntry::plain(97, 65), // a -> A
    RemapEntry::plain(98, 66), // b -> B
    RemapEntry::plain(99, 67), // c -> C
    RemapEntry::plain(100, 68), // d -> D
    RemapEntry::plain(101, 69), // e -> E
    RemapEntry::plain(102, 70), // f -> F
    RemapEntry::plain(103, 71), // g -> G
    RemapEntry::plain(104, 72), // h -> H
    RemapEntry::plain(105, 73), // i -> I
    RemapEntry::plain(106, 74), // j -> J
    RemapEntry::plain(107, 75), // k -> K
    RemapEntry::plain(108, 76), // l -> L
    RemapEntry::plain(109, 77), // m -> M
    RemapEntry::plain(110, 78), // n -> N
    RemapEntry::plain(111, 79), // o -> O
    RemapEntry::plain(112, 80), // p -> P
    RemapEntry::plain(113, 81), // q -> Q
    RemapEntry::plain(114, 82), // r -> R
    RemapEntry::plain(115, 83), // s -> S
    RemapEntry::plain(116, 84), // t -> T
    RemapEntry::plain(117, 85), // u -> U
    RemapEntry::plain(118, 86), // v -> V
    RemapEntry::plain(119, 87), // w -> W
    RemapEntry::plain(120, 88), // x -> X
    RemapEntry::plain(121, 89), // y -> Y
    RemapEntry::plain(122, 90), // z -> Z
    RemapEntry::shifted(123, 93), // { -> ]
    RemapEntry::shifted(125, 92), // } -> \
    RemapEntry::shifted(126, 43), // ~ -> +
];
