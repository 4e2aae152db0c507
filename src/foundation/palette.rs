//! Named colour palette shared by the script language and the autocoder.

use crate::foundation::core::Rgba8;

/// Every colour name the script language understands, in palette order.
pub const COLOURS: &[(&str, Rgba8)] = &[
    ("aliceblue", Rgba8::rgb(0xf0, 0xf8, 0xff)),
    ("antiquewhite", Rgba8::rgb(0xfa, 0xeb, 0xd7)),
    ("aqua", Rgba8::rgb(0x00, 0xff, 0xff)),
    ("aquamarine", Rgba8::rgb(0x7f, 0xff, 0xd4)),
    ("azure", Rgba8::rgb(0xf0, 0xff, 0xff)),
    ("beige", Rgba8::rgb(0xf5, 0xf5, 0xdc)),
    ("bisque", Rgba8::rgb(0xff, 0xe4, 0xc4)),
    ("black", Rgba8::rgb(0x00, 0x00, 0x00)),
    ("blanchedalmond", Rgba8::rgb(0xff, 0xeb, 0xcd)),
    ("blue", Rgba8::rgb(0x00, 0x00, 0xff)),
    ("blueviolet", Rgba8::rgb(0x8a, 0x2b, 0xe2)),
    ("brown", Rgba8::rgb(0xa5, 0x2a, 0x2a)),
    ("burlywood", Rgba8::rgb(0xde, 0xb8, 0x87)),
    ("cadetblue", Rgba8::rgb(0x5f, 0x9e, 0xa0)),
    ("chartreuse", Rgba8::rgb(0x7f, 0xff, 0x00)),
    ("chocolate", Rgba8::rgb(0xd2, 0x69, 0x1e)),
    ("coral", Rgba8::rgb(0xff, 0x7f, 0x50)),
    ("cornflowerblue", Rgba8::rgb(0x64, 0x95, 0xed)),
    ("cornsilk", Rgba8::rgb(0xff, 0xf8, 0xdc)),
    ("crimson", Rgba8::rgb(0xdc, 0x14, 0x3c)),
    ("cyan", Rgba8::rgb(0x00, 0xff, 0xff)),
    ("darkblue", Rgba8::rgb(0x00, 0x00, 0x8b)),
    ("darkcyan", Rgba8::rgb(0x00, 0x8b, 0x8b)),
    ("darkgoldenrod", Rgba8::rgb(0xb8, 0x86, 0x0b)),
    ("darkgray", Rgba8::rgb(0xa9, 0xa9, 0xa9)),
    ("darkgrey", Rgba8::rgb(0xa9, 0xa9, 0xa9)),
    ("darkgreen", Rgba8::rgb(0x00, 0x64, 0x00)),
    ("darkkhaki", Rgba8::rgb(0xbd, 0xb7, 0x6b)),
    ("darkmagenta", Rgba8::rgb(0x8b, 0x00, 0x8b)),
    ("darkolivegreen", Rgba8::rgb(0x55, 0x6b, 0x2f)),
    ("darkorange", Rgba8::rgb(0xff, 0x8c, 0x00)),
    ("darkorchid", Rgba8::rgb(0x99, 0x32, 0xcc)),
    ("darkred", Rgba8::rgb(0x8b, 0x00, 0x00)),
    ("darksalmon", Rgba8::rgb(0xe9, 0x96, 0x7a)),
    ("darkseagreen", Rgba8::rgb(0x8f, 0xbc, 0x8f)),
    ("darkslateblue", Rgba8::rgb(0x48, 0x3d, 0x8b)),
    ("darkslategray", Rgba8::rgb(0x2f, 0x4f, 0x4f)),
    ("darkslategrey", Rgba8::rgb(0x2f, 0x4f, 0x4f)),
    ("darkturquoise", Rgba8::rgb(0x00, 0xce, 0xd1)),
    ("darkviolet", Rgba8::rgb(0x94, 0x00, 0xd3)),
    ("deeppink", Rgba8::rgb(0xff, 0x14, 0x93)),
    ("deepskyblue", Rgba8::rgb(0x00, 0xbf, 0xff)),
    ("dimgray", Rgba8::rgb(0x69, 0x69, 0x69)),
    ("dimgrey", Rgba8::rgb(0x69, 0x69, 0x69)),
    ("dodgerblue", Rgba8::rgb(0x1e, 0x90, 0xff)),
    ("firebrick", Rgba8::rgb(0xb2, 0x22, 0x22)),
    ("floralwhite", Rgba8::rgb(0xff, 0xfa, 0xf0)),
    ("forestgreen", Rgba8::rgb(0x22, 0x8b, 0x22)),
    ("fuchsia", Rgba8::rgb(0xff, 0x00, 0xff)),
    ("gainsboro", Rgba8::rgb(0xdc, 0xdc, 0xdc)),
    ("ghostwhite", Rgba8::rgb(0xf8, 0xf8, 0xff)),
    ("gold", Rgba8::rgb(0xff, 0xd7, 0x00)),
    ("goldenrod", Rgba8::rgb(0xda, 0xa5, 0x20)),
    ("gray", Rgba8::rgb(0x80, 0x80, 0x80)),
    ("grey", Rgba8::rgb(0x80, 0x80, 0x80)),
    ("green", Rgba8::rgb(0x00, 0x80, 0x00)),
    ("greenyellow", Rgba8::rgb(0xad, 0xff, 0x2f)),
    ("honeydew", Rgba8::rgb(0xf0, 0xff, 0xf0)),
    ("hotpink", Rgba8::rgb(0xff, 0x69, 0xb4)),
    ("indianred", Rgba8::rgb(0xcd, 0x5c, 0x5c)),
    ("indigo", Rgba8::rgb(0x4b, 0x00, 0x82)),
    ("ivory", Rgba8::rgb(0xff, 0xff, 0xf0)),
    ("khaki", Rgba8::rgb(0xf0, 0xe6, 0x8c)),
    ("lavender", Rgba8::rgb(0xe6, 0xe6, 0xfa)),
    ("lavenderblush", Rgba8::rgb(0xff, 0xf0, 0xf5)),
    ("lawngreen", Rgba8::rgb(0x7c, 0xfc, 0x00)),
    ("lemonchiffon", Rgba8::rgb(0xff, 0xfa, 0xcd)),
    ("lightblue", Rgba8::rgb(0xad, 0xd8, 0xe6)),
    ("lightcoral", Rgba8::rgb(0xf0, 0x80, 0x80)),
    ("lightcyan", Rgba8::rgb(0xe0, 0xff, 0xff)),
    ("lightgoldenrodyellow", Rgba8::rgb(0xfa, 0xfa, 0xd2)),
    ("lightgrey", Rgba8::rgb(0xd3, 0xd3, 0xd3)),
    ("lightgray", Rgba8::rgb(0xd3, 0xd3, 0xd3)),
    ("lightgreen", Rgba8::rgb(0x90, 0xee, 0x90)),
    ("lightpink", Rgba8::rgb(0xff, 0xb6, 0xc1)),
    ("lightsalmon", Rgba8::rgb(0xff, 0xa0, 0x7a)),
    ("lightseagreen", Rgba8::rgb(0x20, 0xb2, 0xaa)),
    ("lightskyblue", Rgba8::rgb(0x87, 0xce, 0xfa)),
    ("lightslategray", Rgba8::rgb(0x77, 0x88, 0x99)),
    ("lightslategrey", Rgba8::rgb(0x77, 0x88, 0x99)),
    ("lightsteelblue", Rgba8::rgb(0xb0, 0xc4, 0xde)),
    ("lightyellow", Rgba8::rgb(0xff, 0xff, 0xe0)),
    ("lime", Rgba8::rgb(0x00, 0xff, 0x00)),
    ("limegreen", Rgba8::rgb(0x32, 0xcd, 0x32)),
    ("linen", Rgba8::rgb(0xfa, 0xf0, 0xe6)),
    ("magenta", Rgba8::rgb(0xff, 0x00, 0xff)),
    ("maroon", Rgba8::rgb(0x80, 0x00, 0x00)),
    ("mediumaquamarine", Rgba8::rgb(0x66, 0xcd, 0xaa)),
    ("mediumblue", Rgba8::rgb(0x00, 0x00, 0xcd)),
    ("mediumorchid", Rgba8::rgb(0xba, 0x55, 0xd3)),
    ("mediumpurple", Rgba8::rgb(0x93, 0x70, 0xd8)),
    ("mediumseagreen", Rgba8::rgb(0x3c, 0xb3, 0x71)),
    ("mediumslateblue", Rgba8::rgb(0x7b, 0x68, 0xee)),
    ("mediumspringgreen", Rgba8::rgb(0x00, 0xfa, 0x9a)),
    ("mediumturquoise", Rgba8::rgb(0x48, 0xd1, 0xcc)),
    ("mediumvioletred", Rgba8::rgb(0xc7, 0x15, 0x85)),
    ("midnightblue", Rgba8::rgb(0x19, 0x19, 0x70)),
    ("mintcream", Rgba8::rgb(0xf5, 0xff, 0xfa)),
    ("mistyrose", Rgba8::rgb(0xff, 0xe4, 0xe1)),
    ("moccasin", Rgba8::rgb(0xff, 0xe4, 0xb5)),
    ("navajowhite", Rgba8::rgb(0xff, 0xde, 0xad)),
    ("navy", Rgba8::rgb(0x00, 0x00, 0x80)),
    ("oldlace", Rgba8::rgb(0xfd, 0xf5, 0xe6)),
    ("olive", Rgba8::rgb(0x80, 0x80, 0x00)),
    ("olivedrab", Rgba8::rgb(0x6b, 0x8e, 0x23)),
    ("orange", Rgba8::rgb(0xff, 0xa5, 0x00)),
    ("orangered", Rgba8::rgb(0xff, 0x45, 0x00)),
    ("orchid", Rgba8::rgb(0xda, 0x70, 0xd6)),
    ("palegoldenrod", Rgba8::rgb(0xee, 0xe8, 0xaa)),
    ("palegreen", Rgba8::rgb(0x98, 0xfb, 0x98)),
    ("paleturquoise", Rgba8::rgb(0xaf, 0xee, 0xee)),
    ("palevioletred", Rgba8::rgb(0xd8, 0x70, 0x93)),
    ("papayawhip", Rgba8::rgb(0xff, 0xef, 0xd5)),
    ("peachpuff", Rgba8::rgb(0xff, 0xda, 0xb9)),
    ("peru", Rgba8::rgb(0xcd, 0x85, 0x3f)),
    ("pink", Rgba8::rgb(0xff, 0xc0, 0xcb)),
    ("plum", Rgba8::rgb(0xdd, 0xa0, 0xdd)),
    ("powderblue", Rgba8::rgb(0xb0, 0xe0, 0xe6)),
    ("purple", Rgba8::rgb(0x80, 0x00, 0x80)),
    ("red", Rgba8::rgb(0xff, 0x00, 0x00)),
    ("rosybrown", Rgba8::rgb(0xbc, 0x8f, 0x8f)),
    ("royalblue", Rgba8::rgb(0x41, 0x69, 0xe1)),
    ("saddlebrown", Rgba8::rgb(0x8b, 0x45, 0x13)),
    ("salmon", Rgba8::rgb(0xfa, 0x80, 0x72)),
    ("sandybrown", Rgba8::rgb(0xf4, 0xa4, 0x60)),
    ("seagreen", Rgba8::rgb(0x2e, 0x8b, 0x57)),
    ("seashell", Rgba8::rgb(0xff, 0xf5, 0xee)),
    ("sienna", Rgba8::rgb(0xa0, 0x52, 0x2d)),
    ("silver", Rgba8::rgb(0xc0, 0xc0, 0xc0)),
    ("skyblue", Rgba8::rgb(0x87, 0xce, 0xeb)),
    ("slateblue", Rgba8::rgb(0x6a, 0x5a, 0xcd)),
    ("slategray", Rgba8::rgb(0x70, 0x80, 0x90)),
    ("slategrey", Rgba8::rgb(0x70, 0x80, 0x90)),
    ("snow", Rgba8::rgb(0xff, 0xfa, 0xfa)),
    ("springgreen", Rgba8::rgb(0x00, 0xff, 0x7f)),
    ("steelblue", Rgba8::rgb(0x46, 0x82, 0xb4)),
    ("tan", Rgba8::rgb(0xd2, 0xb4, 0x8c)),
    ("teal", Rgba8::rgb(0x00, 0x80, 0x80)),
    ("thistle", Rgba8::rgb(0xd8, 0xbf, 0xd8)),
    ("tomato", Rgba8::rgb(0xff, 0x63, 0x47)),
    ("turquoise", Rgba8::rgb(0x40, 0xe0, 0xd0)),
    ("violet", Rgba8::rgb(0xee, 0x82, 0xee)),
    ("wheat", Rgba8::rgb(0xf5, 0xde, 0xb3)),
    ("white", Rgba8::rgb(0xff, 0xff, 0xff)),
    ("whitesmoke", Rgba8::rgb(0xf5, 0xf5, 0xf5)),
    ("yellow", Rgba8::rgb(0xff, 0xff, 0x00)),
    ("yellowgreen", Rgba8::rgb(0x9a, 0xcd, 0x32)),
];

/// Look a colour up by its exact (lower-case) name.
pub fn lookup(name: &str) -> Option<Rgba8> {
    COLOURS.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

pub fn is_colour_name(name: &str) -> bool {
    lookup(name).is_some()
}

/// Palette names in palette order.
pub fn names() -> impl ExactSizeIterator<Item = &'static str> {
    COLOURS.iter().map(|(n, _)| *n)
}
