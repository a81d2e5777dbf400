//! The WHATWG named character reference table.
//!
//! Generated from the `html.entities.html5` table shipped with CPython
//! (itself generated from the WHATWG entities.json); do not edit.
//! References are grouped by the first character of their name and
//! sorted longest-first so that speculative matching is max-munch.

/// A named character reference: the name minus its first character
/// (including the trailing `;` when the reference has one) and the
/// characters it expands to.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CharRef {
    pub(crate) name: &'static str,
    pub(crate) characters: &'static str,
}

static UPPER_A: &[CharRef] = &[
    CharRef { name: "pplyFunction;", characters: "\u{2061}" },
    CharRef { name: "acute;", characters: "\u{c1}" },
    CharRef { name: "breve;", characters: "\u{102}" },
    CharRef { name: "grave;", characters: "\u{c0}" },
    CharRef { name: "ssign;", characters: "\u{2254}" },
    CharRef { name: "tilde;", characters: "\u{c3}" },
    CharRef { name: "Elig;", characters: "\u{c6}" },
    CharRef { name: "acute", characters: "\u{c1}" },
    CharRef { name: "circ;", characters: "\u{c2}" },
    CharRef { name: "grave", characters: "\u{c0}" },
    CharRef { name: "lpha;", characters: "\u{391}" },
    CharRef { name: "macr;", characters: "\u{100}" },
    CharRef { name: "ogon;", characters: "\u{104}" },
    CharRef { name: "ring;", characters: "\u{c5}" },
    CharRef { name: "tilde", characters: "\u{c3}" },
    CharRef { name: "Elig", characters: "\u{c6}" },
    CharRef { name: "circ", characters: "\u{c2}" },
    CharRef { name: "opf;", characters: "\u{1d538}" },
    CharRef { name: "ring", characters: "\u{c5}" },
    CharRef { name: "scr;", characters: "\u{1d49c}" },
    CharRef { name: "uml;", characters: "\u{c4}" },
    CharRef { name: "MP;", characters: "&" },
    CharRef { name: "cy;", characters: "\u{410}" },
    CharRef { name: "fr;", characters: "\u{1d504}" },
    CharRef { name: "nd;", characters: "\u{2a53}" },
    CharRef { name: "uml", characters: "\u{c4}" },
    CharRef { name: "MP", characters: "&" },
];

static UPPER_B: &[CharRef] = &[
    CharRef { name: "ernoullis;", characters: "\u{212c}" },
    CharRef { name: "ackslash;", characters: "\u{2216}" },
    CharRef { name: "ecause;", characters: "\u{2235}" },
    CharRef { name: "arwed;", characters: "\u{2306}" },
    CharRef { name: "umpeq;", characters: "\u{224e}" },
    CharRef { name: "reve;", characters: "\u{2d8}" },
    CharRef { name: "arv;", characters: "\u{2ae7}" },
    CharRef { name: "eta;", characters: "\u{392}" },
    CharRef { name: "opf;", characters: "\u{1d539}" },
    CharRef { name: "scr;", characters: "\u{212c}" },
    CharRef { name: "cy;", characters: "\u{411}" },
    CharRef { name: "fr;", characters: "\u{1d505}" },
];

static UPPER_C: &[CharRef] = &[
    CharRef { name: "ounterClockwiseContourIntegral;", characters: "\u{2233}" },
    CharRef { name: "lockwiseContourIntegral;", characters: "\u{2232}" },
    CharRef { name: "loseCurlyDoubleQuote;", characters: "\u{201d}" },
    CharRef { name: "apitalDifferentialD;", characters: "\u{2145}" },
    CharRef { name: "loseCurlyQuote;", characters: "\u{2019}" },
    CharRef { name: "ontourIntegral;", characters: "\u{222e}" },
    CharRef { name: "ircleMinus;", characters: "\u{2296}" },
    CharRef { name: "ircleTimes;", characters: "\u{2297}" },
    CharRef { name: "irclePlus;", characters: "\u{2295}" },
    CharRef { name: "enterDot;", characters: "\u{b7}" },
    CharRef { name: "ircleDot;", characters: "\u{2299}" },
    CharRef { name: "ongruent;", characters: "\u{2261}" },
    CharRef { name: "oproduct;", characters: "\u{2210}" },
    CharRef { name: "ayleys;", characters: "\u{212d}" },
    CharRef { name: "conint;", characters: "\u{2230}" },
    CharRef { name: "edilla;", characters: "\u{b8}" },
    CharRef { name: "acute;", characters: "\u{106}" },
    CharRef { name: "caron;", characters: "\u{10c}" },
    CharRef { name: "cedil;", characters: "\u{c7}" },
    CharRef { name: "olone;", characters: "\u{2a74}" },
    CharRef { name: "onint;", characters: "\u{222f}" },
    CharRef { name: "upCap;", characters: "\u{224d}" },
    CharRef { name: "cedil", characters: "\u{c7}" },
    CharRef { name: "circ;", characters: "\u{108}" },
    CharRef { name: "olon;", characters: "\u{2237}" },
    CharRef { name: "ross;", characters: "\u{2a2f}" },
    CharRef { name: "Hcy;", characters: "\u{427}" },
    CharRef { name: "OPY;", characters: "\u{a9}" },
    CharRef { name: "dot;", characters: "\u{10a}" },
    CharRef { name: "opf;", characters: "\u{2102}" },
    CharRef { name: "scr;", characters: "\u{1d49e}" },
    CharRef { name: "OPY", characters: "\u{a9}" },
    CharRef { name: "ap;", characters: "\u{22d2}" },
    CharRef { name: "fr;", characters: "\u{212d}" },
    CharRef { name: "hi;", characters: "\u{3a7}" },
    CharRef { name: "up;", characters: "\u{22d3}" },
];

static UPPER_D: &[CharRef] = &[
    CharRef { name: "oubleLongLeftRightArrow;", characters: "\u{27fa}" },
    CharRef { name: "iacriticalDoubleAcute;", characters: "\u{2dd}" },
    CharRef { name: "oubleContourIntegral;", characters: "\u{222f}" },
    CharRef { name: "oubleLeftRightArrow;", characters: "\u{21d4}" },
    CharRef { name: "oubleLongRightArrow;", characters: "\u{27f9}" },
    CharRef { name: "oubleLongLeftArrow;", characters: "\u{27f8}" },
    CharRef { name: "ownLeftRightVector;", characters: "\u{2950}" },
    CharRef { name: "ownRightTeeVector;", characters: "\u{295f}" },
    CharRef { name: "ownRightVectorBar;", characters: "\u{2957}" },
    CharRef { name: "oubleUpDownArrow;", characters: "\u{21d5}" },
    CharRef { name: "oubleVerticalBar;", characters: "\u{2225}" },
    CharRef { name: "ownLeftTeeVector;", characters: "\u{295e}" },
    CharRef { name: "ownLeftVectorBar;", characters: "\u{2956}" },
    CharRef { name: "iacriticalAcute;", characters: "\u{b4}" },
    CharRef { name: "iacriticalGrave;", characters: "`" },
    CharRef { name: "iacriticalTilde;", characters: "\u{2dc}" },
    CharRef { name: "oubleRightArrow;", characters: "\u{21d2}" },
    CharRef { name: "ownArrowUpArrow;", characters: "\u{21f5}" },
    CharRef { name: "oubleDownArrow;", characters: "\u{21d3}" },
    CharRef { name: "oubleLeftArrow;", characters: "\u{21d0}" },
    CharRef { name: "ownRightVector;", characters: "\u{21c1}" },
    CharRef { name: "iacriticalDot;", characters: "\u{2d9}" },
    CharRef { name: "oubleRightTee;", characters: "\u{22a8}" },
    CharRef { name: "ownLeftVector;", characters: "\u{21bd}" },
    CharRef { name: "ifferentialD;", characters: "\u{2146}" },
    CharRef { name: "oubleLeftTee;", characters: "\u{2ae4}" },
    CharRef { name: "oubleUpArrow;", characters: "\u{21d1}" },
    CharRef { name: "ownArrowBar;", characters: "\u{2913}" },
    CharRef { name: "ownTeeArrow;", characters: "\u{21a7}" },
    CharRef { name: "oubleDot;", characters: "\u{a8}" },
    CharRef { name: "ownArrow;", characters: "\u{2193}" },
    CharRef { name: "ownBreve;", characters: "\u{311}" },
    CharRef { name: "ownarrow;", characters: "\u{21d3}" },
    CharRef { name: "Dotrahd;", characters: "\u{2911}" },
    CharRef { name: "otEqual;", characters: "\u{2250}" },
    CharRef { name: "iamond;", characters: "\u{22c4}" },
    CharRef { name: "ownTee;", characters: "\u{22a4}" },
    CharRef { name: "agger;", characters: "\u{2021}" },
    CharRef { name: "caron;", characters: "\u{10e}" },
    CharRef { name: "otDot;", characters: "\u{20dc}" },
    CharRef { name: "strok;", characters: "\u{110}" },
    CharRef { name: "ashv;", characters: "\u{2ae4}" },
    CharRef { name: "elta;", characters: "\u{394}" },
    CharRef { name: "Jcy;", characters: "\u{402}" },
    CharRef { name: "Scy;", characters: "\u{405}" },
    CharRef { name: "Zcy;", characters: "\u{40f}" },
    CharRef { name: "arr;", characters: "\u{21a1}" },
    CharRef { name: "opf;", characters: "\u{1d53b}" },
    CharRef { name: "scr;", characters: "\u{1d49f}" },
    CharRef { name: "cy;", characters: "\u{414}" },
    CharRef { name: "el;", characters: "\u{2207}" },
    CharRef { name: "fr;", characters: "\u{1d507}" },
    CharRef { name: "ot;", characters: "\u{a8}" },
    CharRef { name: "D;", characters: "\u{2145}" },
];

static UPPER_E: &[CharRef] = &[
    CharRef { name: "mptyVerySmallSquare;", characters: "\u{25ab}" },
    CharRef { name: "mptySmallSquare;", characters: "\u{25fb}" },
    CharRef { name: "xponentialE;", characters: "\u{2147}" },
    CharRef { name: "quilibrium;", characters: "\u{21cc}" },
    CharRef { name: "qualTilde;", characters: "\u{2242}" },
    CharRef { name: "lement;", characters: "\u{2208}" },
    CharRef { name: "psilon;", characters: "\u{395}" },
    CharRef { name: "acute;", characters: "\u{c9}" },
    CharRef { name: "caron;", characters: "\u{11a}" },
    CharRef { name: "grave;", characters: "\u{c8}" },
    CharRef { name: "xists;", characters: "\u{2203}" },
    CharRef { name: "acute", characters: "\u{c9}" },
    CharRef { name: "circ;", characters: "\u{ca}" },
    CharRef { name: "grave", characters: "\u{c8}" },
    CharRef { name: "macr;", characters: "\u{112}" },
    CharRef { name: "ogon;", characters: "\u{118}" },
    CharRef { name: "qual;", characters: "\u{2a75}" },
    CharRef { name: "circ", characters: "\u{ca}" },
    CharRef { name: "dot;", characters: "\u{116}" },
    CharRef { name: "opf;", characters: "\u{1d53c}" },
    CharRef { name: "scr;", characters: "\u{2130}" },
    CharRef { name: "sim;", characters: "\u{2a73}" },
    CharRef { name: "uml;", characters: "\u{cb}" },
    CharRef { name: "NG;", characters: "\u{14a}" },
    CharRef { name: "TH;", characters: "\u{d0}" },
    CharRef { name: "cy;", characters: "\u{42d}" },
    CharRef { name: "fr;", characters: "\u{1d508}" },
    CharRef { name: "ta;", characters: "\u{397}" },
    CharRef { name: "uml", characters: "\u{cb}" },
    CharRef { name: "TH", characters: "\u{d0}" },
];

static UPPER_F: &[CharRef] = &[
    CharRef { name: "illedVerySmallSquare;", characters: "\u{25aa}" },
    CharRef { name: "illedSmallSquare;", characters: "\u{25fc}" },
    CharRef { name: "ouriertrf;", characters: "\u{2131}" },
    CharRef { name: "orAll;", characters: "\u{2200}" },
    CharRef { name: "opf;", characters: "\u{1d53d}" },
    CharRef { name: "scr;", characters: "\u{2131}" },
    CharRef { name: "cy;", characters: "\u{424}" },
    CharRef { name: "fr;", characters: "\u{1d509}" },
];

static UPPER_G: &[CharRef] = &[
    CharRef { name: "reaterSlantEqual;", characters: "\u{2a7e}" },
    CharRef { name: "reaterEqualLess;", characters: "\u{22db}" },
    CharRef { name: "reaterFullEqual;", characters: "\u{2267}" },
    CharRef { name: "reaterGreater;", characters: "\u{2aa2}" },
    CharRef { name: "reaterEqual;", characters: "\u{2265}" },
    CharRef { name: "reaterTilde;", characters: "\u{2273}" },
    CharRef { name: "reaterLess;", characters: "\u{2277}" },
    CharRef { name: "ammad;", characters: "\u{3dc}" },
    CharRef { name: "breve;", characters: "\u{11e}" },
    CharRef { name: "cedil;", characters: "\u{122}" },
    CharRef { name: "amma;", characters: "\u{393}" },
    CharRef { name: "circ;", characters: "\u{11c}" },
    CharRef { name: "Jcy;", characters: "\u{403}" },
    CharRef { name: "dot;", characters: "\u{120}" },
    CharRef { name: "opf;", characters: "\u{1d53e}" },
    CharRef { name: "scr;", characters: "\u{1d4a2}" },
    CharRef { name: "cy;", characters: "\u{413}" },
    CharRef { name: "fr;", characters: "\u{1d50a}" },
    CharRef { name: "T;", characters: ">" },
    CharRef { name: "g;", characters: "\u{22d9}" },
    CharRef { name: "t;", characters: "\u{226b}" },
    CharRef { name: "T", characters: ">" },
];

static UPPER_H: &[CharRef] = &[
    CharRef { name: "orizontalLine;", characters: "\u{2500}" },
    CharRef { name: "ilbertSpace;", characters: "\u{210b}" },
    CharRef { name: "umpDownHump;", characters: "\u{224e}" },
    CharRef { name: "umpEqual;", characters: "\u{224f}" },
    CharRef { name: "ARDcy;", characters: "\u{42a}" },
    CharRef { name: "strok;", characters: "\u{126}" },
    CharRef { name: "acek;", characters: "\u{2c7}" },
    CharRef { name: "circ;", characters: "\u{124}" },
    CharRef { name: "opf;", characters: "\u{210d}" },
    CharRef { name: "scr;", characters: "\u{210b}" },
    CharRef { name: "at;", characters: "^" },
    CharRef { name: "fr;", characters: "\u{210c}" },
];

static UPPER_I: &[CharRef] = &[
    CharRef { name: "nvisibleComma;", characters: "\u{2063}" },
    CharRef { name: "nvisibleTimes;", characters: "\u{2062}" },
    CharRef { name: "ntersection;", characters: "\u{22c2}" },
    CharRef { name: "maginaryI;", characters: "\u{2148}" },
    CharRef { name: "ntegral;", characters: "\u{222b}" },
    CharRef { name: "mplies;", characters: "\u{21d2}" },
    CharRef { name: "acute;", characters: "\u{cd}" },
    CharRef { name: "grave;", characters: "\u{cc}" },
    CharRef { name: "tilde;", characters: "\u{128}" },
    CharRef { name: "Jlig;", characters: "\u{132}" },
    CharRef { name: "acute", characters: "\u{cd}" },
    CharRef { name: "circ;", characters: "\u{ce}" },
    CharRef { name: "grave", characters: "\u{cc}" },
    CharRef { name: "macr;", characters: "\u{12a}" },
    CharRef { name: "ogon;", characters: "\u{12e}" },
    CharRef { name: "ukcy;", characters: "\u{406}" },
    CharRef { name: "Ecy;", characters: "\u{415}" },
    CharRef { name: "Ocy;", characters: "\u{401}" },
    CharRef { name: "circ", characters: "\u{ce}" },
    CharRef { name: "dot;", characters: "\u{130}" },
    CharRef { name: "opf;", characters: "\u{1d540}" },
    CharRef { name: "ota;", characters: "\u{399}" },
    CharRef { name: "scr;", characters: "\u{2110}" },
    CharRef { name: "uml;", characters: "\u{cf}" },
    CharRef { name: "cy;", characters: "\u{418}" },
    CharRef { name: "fr;", characters: "\u{2111}" },
    CharRef { name: "nt;", characters: "\u{222c}" },
    CharRef { name: "uml", characters: "\u{cf}" },
    CharRef { name: "m;", characters: "\u{2111}" },
];

static UPPER_J: &[CharRef] = &[
    CharRef { name: "sercy;", characters: "\u{408}" },
    CharRef { name: "circ;", characters: "\u{134}" },
    CharRef { name: "ukcy;", characters: "\u{404}" },
    CharRef { name: "opf;", characters: "\u{1d541}" },
    CharRef { name: "scr;", characters: "\u{1d4a5}" },
    CharRef { name: "cy;", characters: "\u{419}" },
    CharRef { name: "fr;", characters: "\u{1d50d}" },
];

static UPPER_K: &[CharRef] = &[
    CharRef { name: "cedil;", characters: "\u{136}" },
    CharRef { name: "appa;", characters: "\u{39a}" },
    CharRef { name: "Hcy;", characters: "\u{425}" },
    CharRef { name: "Jcy;", characters: "\u{40c}" },
    CharRef { name: "opf;", characters: "\u{1d542}" },
    CharRef { name: "scr;", characters: "\u{1d4a6}" },
    CharRef { name: "cy;", characters: "\u{41a}" },
    CharRef { name: "fr;", characters: "\u{1d50e}" },
];

static UPPER_L: &[CharRef] = &[
    CharRef { name: "eftArrowRightArrow;", characters: "\u{21c6}" },
    CharRef { name: "ongLeftRightArrow;", characters: "\u{27f7}" },
    CharRef { name: "ongleftrightarrow;", characters: "\u{27fa}" },
    CharRef { name: "eftDoubleBracket;", characters: "\u{27e6}" },
    CharRef { name: "eftDownTeeVector;", characters: "\u{2961}" },
    CharRef { name: "eftDownVectorBar;", characters: "\u{2959}" },
    CharRef { name: "eftTriangleEqual;", characters: "\u{22b4}" },
    CharRef { name: "eftAngleBracket;", characters: "\u{27e8}" },
    CharRef { name: "eftUpDownVector;", characters: "\u{2951}" },
    CharRef { name: "essEqualGreater;", characters: "\u{22da}" },
    CharRef { name: "eftRightVector;", characters: "\u{294e}" },
    CharRef { name: "eftTriangleBar;", characters: "\u{29cf}" },
    CharRef { name: "eftUpTeeVector;", characters: "\u{2960}" },
    CharRef { name: "eftUpVectorBar;", characters: "\u{2958}" },
    CharRef { name: "owerRightArrow;", characters: "\u{2198}" },
    CharRef { name: "eftDownVector;", characters: "\u{21c3}" },
    CharRef { name: "eftRightArrow;", characters: "\u{2194}" },
    CharRef { name: "eftrightarrow;", characters: "\u{21d4}" },
    CharRef { name: "essSlantEqual;", characters: "\u{2a7d}" },
    CharRef { name: "ongRightArrow;", characters: "\u{27f6}" },
    CharRef { name: "ongrightarrow;", characters: "\u{27f9}" },
    CharRef { name: "owerLeftArrow;", characters: "\u{2199}" },
    CharRef { name: "eftTeeVector;", characters: "\u{295a}" },
    CharRef { name: "eftVectorBar;", characters: "\u{2952}" },
    CharRef { name: "essFullEqual;", characters: "\u{2266}" },
    CharRef { name: "ongLeftArrow;", characters: "\u{27f5}" },
    CharRef { name: "ongleftarrow;", characters: "\u{27f8}" },
    CharRef { name: "eftArrowBar;", characters: "\u{21e4}" },
    CharRef { name: "eftTeeArrow;", characters: "\u{21a4}" },
    CharRef { name: "eftTriangle;", characters: "\u{22b2}" },
    CharRef { name: "eftUpVector;", characters: "\u{21bf}" },
    CharRef { name: "eftCeiling;", characters: "\u{2308}" },
    CharRef { name: "essGreater;", characters: "\u{2276}" },
    CharRef { name: "aplacetrf;", characters: "\u{2112}" },
    CharRef { name: "eftVector;", characters: "\u{21bc}" },
    CharRef { name: "leftarrow;", characters: "\u{21da}" },
    CharRef { name: "eftArrow;", characters: "\u{2190}" },
    CharRef { name: "eftFloor;", characters: "\u{230a}" },
    CharRef { name: "eftarrow;", characters: "\u{21d0}" },
    CharRef { name: "essTilde;", characters: "\u{2272}" },
    CharRef { name: "essLess;", characters: "\u{2aa1}" },
    CharRef { name: "eftTee;", characters: "\u{22a3}" },
    CharRef { name: "acute;", characters: "\u{139}" },
    CharRef { name: "ambda;", characters: "\u{39b}" },
    CharRef { name: "caron;", characters: "\u{13d}" },
    CharRef { name: "cedil;", characters: "\u{13b}" },
    CharRef { name: "midot;", characters: "\u{13f}" },
    CharRef { name: "strok;", characters: "\u{141}" },
    CharRef { name: "Jcy;", characters: "\u{409}" },
    CharRef { name: "ang;", characters: "\u{27ea}" },
    CharRef { name: "arr;", characters: "\u{219e}" },
    CharRef { name: "opf;", characters: "\u{1d543}" },
    CharRef { name: "scr;", characters: "\u{2112}" },
    CharRef { name: "cy;", characters: "\u{41b}" },
    CharRef { name: "fr;", characters: "\u{1d50f}" },
    CharRef { name: "sh;", characters: "\u{21b0}" },
    CharRef { name: "T;", characters: "<" },
    CharRef { name: "l;", characters: "\u{22d8}" },
    CharRef { name: "t;", characters: "\u{226a}" },
    CharRef { name: "T", characters: "<" },
];

static UPPER_M: &[CharRef] = &[
    CharRef { name: "ediumSpace;", characters: "\u{205f}" },
    CharRef { name: "ellintrf;", characters: "\u{2133}" },
    CharRef { name: "inusPlus;", characters: "\u{2213}" },
    CharRef { name: "opf;", characters: "\u{1d544}" },
    CharRef { name: "scr;", characters: "\u{2133}" },
    CharRef { name: "ap;", characters: "\u{2905}" },
    CharRef { name: "cy;", characters: "\u{41c}" },
    CharRef { name: "fr;", characters: "\u{1d510}" },
    CharRef { name: "u;", characters: "\u{39c}" },
];

static UPPER_N: &[CharRef] = &[
    CharRef { name: "otNestedGreaterGreater;", characters: "\u{2aa2}\u{338}" },
    CharRef { name: "otSquareSupersetEqual;", characters: "\u{22e3}" },
    CharRef { name: "egativeVeryThinSpace;", characters: "\u{200b}" },
    CharRef { name: "otPrecedesSlantEqual;", characters: "\u{22e0}" },
    CharRef { name: "otRightTriangleEqual;", characters: "\u{22ed}" },
    CharRef { name: "otSucceedsSlantEqual;", characters: "\u{22e1}" },
    CharRef { name: "estedGreaterGreater;", characters: "\u{226b}" },
    CharRef { name: "otDoubleVerticalBar;", characters: "\u{2226}" },
    CharRef { name: "otGreaterSlantEqual;", characters: "\u{2a7e}\u{338}" },
    CharRef { name: "otLeftTriangleEqual;", characters: "\u{22ec}" },
    CharRef { name: "otSquareSubsetEqual;", characters: "\u{22e2}" },
    CharRef { name: "egativeMediumSpace;", characters: "\u{200b}" },
    CharRef { name: "otGreaterFullEqual;", characters: "\u{2267}\u{338}" },
    CharRef { name: "otRightTriangleBar;", characters: "\u{29d0}\u{338}" },
    CharRef { name: "egativeThickSpace;", characters: "\u{200b}" },
    CharRef { name: "otLeftTriangleBar;", characters: "\u{29cf}\u{338}" },
    CharRef { name: "egativeThinSpace;", characters: "\u{200b}" },
    CharRef { name: "otGreaterGreater;", characters: "\u{226b}\u{338}" },
    CharRef { name: "otLessSlantEqual;", characters: "\u{2a7d}\u{338}" },
    CharRef { name: "otNestedLessLess;", characters: "\u{2aa1}\u{338}" },
    CharRef { name: "otReverseElement;", characters: "\u{220c}" },
    CharRef { name: "otSquareSuperset;", characters: "\u{2290}\u{338}" },
    CharRef { name: "otTildeFullEqual;", characters: "\u{2247}" },
    CharRef { name: "onBreakingSpace;", characters: "\u{a0}" },
    CharRef { name: "otPrecedesEqual;", characters: "\u{2aaf}\u{338}" },
    CharRef { name: "otRightTriangle;", characters: "\u{22eb}" },
    CharRef { name: "otSucceedsEqual;", characters: "\u{2ab0}\u{338}" },
    CharRef { name: "otSucceedsTilde;", characters: "\u{227f}\u{338}" },
    CharRef { name: "otSupersetEqual;", characters: "\u{2289}" },
    CharRef { name: "otGreaterEqual;", characters: "\u{2271}" },
    CharRef { name: "otGreaterTilde;", characters: "\u{2275}" },
    CharRef { name: "otHumpDownHump;", characters: "\u{224e}\u{338}" },
    CharRef { name: "otLeftTriangle;", characters: "\u{22ea}" },
    CharRef { name: "otSquareSubset;", characters: "\u{228f}\u{338}" },
    CharRef { name: "estedLessLess;", characters: "\u{226a}" },
    CharRef { name: "otGreaterLess;", characters: "\u{2279}" },
    CharRef { name: "otLessGreater;", characters: "\u{2278}" },
    CharRef { name: "otSubsetEqual;", characters: "\u{2288}" },
    CharRef { name: "otVerticalBar;", characters: "\u{2224}" },
    CharRef { name: "otEqualTilde;", characters: "\u{2242}\u{338}" },
    CharRef { name: "otTildeEqual;", characters: "\u{2244}" },
    CharRef { name: "otTildeTilde;", characters: "\u{2249}" },
    CharRef { name: "otCongruent;", characters: "\u{2262}" },
    CharRef { name: "otHumpEqual;", characters: "\u{224f}\u{338}" },
    CharRef { name: "otLessEqual;", characters: "\u{2270}" },
    CharRef { name: "otLessTilde;", characters: "\u{2274}" },
    CharRef { name: "otLessLess;", characters: "\u{226a}\u{338}" },
    CharRef { name: "otPrecedes;", characters: "\u{2280}" },
    CharRef { name: "otSucceeds;", characters: "\u{2281}" },
    CharRef { name: "otSuperset;", characters: "\u{2283}\u{20d2}" },
    CharRef { name: "otElement;", characters: "\u{2209}" },
    CharRef { name: "otGreater;", characters: "\u{226f}" },
    CharRef { name: "otCupCap;", characters: "\u{226d}" },
    CharRef { name: "otExists;", characters: "\u{2204}" },
    CharRef { name: "otSubset;", characters: "\u{2282}\u{20d2}" },
    CharRef { name: "otEqual;", characters: "\u{2260}" },
    CharRef { name: "otTilde;", characters: "\u{2241}" },
    CharRef { name: "ewLine;", characters: "\u{a}" },
    CharRef { name: "oBreak;", characters: "\u{2060}" },
    CharRef { name: "otLess;", characters: "\u{226e}" },
    CharRef { name: "acute;", characters: "\u{143}" },
    CharRef { name: "caron;", characters: "\u{147}" },
    CharRef { name: "cedil;", characters: "\u{145}" },
    CharRef { name: "tilde;", characters: "\u{d1}" },
    CharRef { name: "tilde", characters: "\u{d1}" },
    CharRef { name: "Jcy;", characters: "\u{40a}" },
    CharRef { name: "opf;", characters: "\u{2115}" },
    CharRef { name: "scr;", characters: "\u{1d4a9}" },
    CharRef { name: "cy;", characters: "\u{41d}" },
    CharRef { name: "fr;", characters: "\u{1d511}" },
    CharRef { name: "ot;", characters: "\u{2aec}" },
    CharRef { name: "u;", characters: "\u{39d}" },
];

static UPPER_O: &[CharRef] = &[
    CharRef { name: "penCurlyDoubleQuote;", characters: "\u{201c}" },
    CharRef { name: "verParenthesis;", characters: "\u{23dc}" },
    CharRef { name: "penCurlyQuote;", characters: "\u{2018}" },
    CharRef { name: "verBracket;", characters: "\u{23b4}" },
    CharRef { name: "verBrace;", characters: "\u{23de}" },
    CharRef { name: "micron;", characters: "\u{39f}" },
    CharRef { name: "verBar;", characters: "\u{203e}" },
    CharRef { name: "acute;", characters: "\u{d3}" },
    CharRef { name: "dblac;", characters: "\u{150}" },
    CharRef { name: "grave;", characters: "\u{d2}" },
    CharRef { name: "slash;", characters: "\u{d8}" },
    CharRef { name: "tilde;", characters: "\u{d5}" },
    CharRef { name: "times;", characters: "\u{2a37}" },
    CharRef { name: "Elig;", characters: "\u{152}" },
    CharRef { name: "acute", characters: "\u{d3}" },
    CharRef { name: "circ;", characters: "\u{d4}" },
    CharRef { name: "grave", characters: "\u{d2}" },
    CharRef { name: "macr;", characters: "\u{14c}" },
    CharRef { name: "mega;", characters: "\u{3a9}" },
    CharRef { name: "slash", characters: "\u{d8}" },
    CharRef { name: "tilde", characters: "\u{d5}" },
    CharRef { name: "circ", characters: "\u{d4}" },
    CharRef { name: "opf;", characters: "\u{1d546}" },
    CharRef { name: "scr;", characters: "\u{1d4aa}" },
    CharRef { name: "uml;", characters: "\u{d6}" },
    CharRef { name: "cy;", characters: "\u{41e}" },
    CharRef { name: "fr;", characters: "\u{1d512}" },
    CharRef { name: "uml", characters: "\u{d6}" },
    CharRef { name: "r;", characters: "\u{2a54}" },
];

static UPPER_P: &[CharRef] = &[
    CharRef { name: "recedesSlantEqual;", characters: "\u{227c}" },
    CharRef { name: "oincareplane;", characters: "\u{210c}" },
    CharRef { name: "recedesEqual;", characters: "\u{2aaf}" },
    CharRef { name: "recedesTilde;", characters: "\u{227e}" },
    CharRef { name: "roportional;", characters: "\u{221d}" },
    CharRef { name: "roportion;", characters: "\u{2237}" },
    CharRef { name: "lusMinus;", characters: "\u{b1}" },
    CharRef { name: "artialD;", characters: "\u{2202}" },
    CharRef { name: "recedes;", characters: "\u{227a}" },
    CharRef { name: "roduct;", characters: "\u{220f}" },
    CharRef { name: "rime;", characters: "\u{2033}" },
    CharRef { name: "opf;", characters: "\u{2119}" },
    CharRef { name: "scr;", characters: "\u{1d4ab}" },
    CharRef { name: "cy;", characters: "\u{41f}" },
    CharRef { name: "fr;", characters: "\u{1d513}" },
    CharRef { name: "hi;", characters: "\u{3a6}" },
    CharRef { name: "si;", characters: "\u{3a8}" },
    CharRef { name: "i;", characters: "\u{3a0}" },
    CharRef { name: "r;", characters: "\u{2abb}" },
];

static UPPER_Q: &[CharRef] = &[
    CharRef { name: "UOT;", characters: "\"" },
    CharRef { name: "opf;", characters: "\u{211a}" },
    CharRef { name: "scr;", characters: "\u{1d4ac}" },
    CharRef { name: "UOT", characters: "\"" },
    CharRef { name: "fr;", characters: "\u{1d514}" },
];

static UPPER_R: &[CharRef] = &[
    CharRef { name: "everseUpEquilibrium;", characters: "\u{296f}" },
    CharRef { name: "ightArrowLeftArrow;", characters: "\u{21c4}" },
    CharRef { name: "everseEquilibrium;", characters: "\u{21cb}" },
    CharRef { name: "ightDoubleBracket;", characters: "\u{27e7}" },
    CharRef { name: "ightDownTeeVector;", characters: "\u{295d}" },
    CharRef { name: "ightDownVectorBar;", characters: "\u{2955}" },
    CharRef { name: "ightTriangleEqual;", characters: "\u{22b5}" },
    CharRef { name: "ightAngleBracket;", characters: "\u{27e9}" },
    CharRef { name: "ightUpDownVector;", characters: "\u{294f}" },
    CharRef { name: "ightTriangleBar;", characters: "\u{29d0}" },
    CharRef { name: "ightUpTeeVector;", characters: "\u{295c}" },
    CharRef { name: "ightUpVectorBar;", characters: "\u{2954}" },
    CharRef { name: "ightDownVector;", characters: "\u{21c2}" },
    CharRef { name: "everseElement;", characters: "\u{220b}" },
    CharRef { name: "ightTeeVector;", characters: "\u{295b}" },
    CharRef { name: "ightVectorBar;", characters: "\u{2953}" },
    CharRef { name: "ightArrowBar;", characters: "\u{21e5}" },
    CharRef { name: "ightTeeArrow;", characters: "\u{21a6}" },
    CharRef { name: "ightTriangle;", characters: "\u{22b3}" },
    CharRef { name: "ightUpVector;", characters: "\u{21be}" },
    CharRef { name: "ightCeiling;", characters: "\u{2309}" },
    CharRef { name: "oundImplies;", characters: "\u{2970}" },
    CharRef { name: "ightVector;", characters: "\u{21c0}" },
    CharRef { name: "rightarrow;", characters: "\u{21db}" },
    CharRef { name: "uleDelayed;", characters: "\u{29f4}" },
    CharRef { name: "ightArrow;", characters: "\u{2192}" },
    CharRef { name: "ightFloor;", characters: "\u{230b}" },
    CharRef { name: "ightarrow;", characters: "\u{21d2}" },
    CharRef { name: "ightTee;", characters: "\u{22a2}" },
    CharRef { name: "acute;", characters: "\u{154}" },
    CharRef { name: "arrtl;", characters: "\u{2916}" },
    CharRef { name: "caron;", characters: "\u{158}" },
    CharRef { name: "cedil;", characters: "\u{156}" },
    CharRef { name: "Barr;", characters: "\u{2910}" },
    CharRef { name: "ang;", characters: "\u{27eb}" },
    CharRef { name: "arr;", characters: "\u{21a0}" },
    CharRef { name: "opf;", characters: "\u{211d}" },
    CharRef { name: "scr;", characters: "\u{211b}" },
    CharRef { name: "EG;", characters: "\u{ae}" },
    CharRef { name: "cy;", characters: "\u{420}" },
    CharRef { name: "fr;", characters: "\u{211c}" },
    CharRef { name: "ho;", characters: "\u{3a1}" },
    CharRef { name: "sh;", characters: "\u{21b1}" },
    CharRef { name: "EG", characters: "\u{ae}" },
    CharRef { name: "e;", characters: "\u{211c}" },
];

static UPPER_S: &[CharRef] = &[
    CharRef { name: "quareSupersetEqual;", characters: "\u{2292}" },
    CharRef { name: "quareIntersection;", characters: "\u{2293}" },
    CharRef { name: "ucceedsSlantEqual;", characters: "\u{227d}" },
    CharRef { name: "quareSubsetEqual;", characters: "\u{2291}" },
    CharRef { name: "hortRightArrow;", characters: "\u{2192}" },
    CharRef { name: "hortDownArrow;", characters: "\u{2193}" },
    CharRef { name: "hortLeftArrow;", characters: "\u{2190}" },
    CharRef { name: "quareSuperset;", characters: "\u{2290}" },
    CharRef { name: "ucceedsEqual;", characters: "\u{2ab0}" },
    CharRef { name: "ucceedsTilde;", characters: "\u{227f}" },
    CharRef { name: "upersetEqual;", characters: "\u{2287}" },
    CharRef { name: "hortUpArrow;", characters: "\u{2191}" },
    CharRef { name: "quareSubset;", characters: "\u{228f}" },
    CharRef { name: "mallCircle;", characters: "\u{2218}" },
    CharRef { name: "quareUnion;", characters: "\u{2294}" },
    CharRef { name: "ubsetEqual;", characters: "\u{2286}" },
    CharRef { name: "ucceeds;", characters: "\u{227b}" },
    CharRef { name: "uchThat;", characters: "\u{220b}" },
    CharRef { name: "uperset;", characters: "\u{2283}" },
    CharRef { name: "HCHcy;", characters: "\u{429}" },
    CharRef { name: "OFTcy;", characters: "\u{42c}" },
    CharRef { name: "acute;", characters: "\u{15a}" },
    CharRef { name: "caron;", characters: "\u{160}" },
    CharRef { name: "cedil;", characters: "\u{15e}" },
    CharRef { name: "quare;", characters: "\u{25a1}" },
    CharRef { name: "ubset;", characters: "\u{22d0}" },
    CharRef { name: "upset;", characters: "\u{22d1}" },
    CharRef { name: "circ;", characters: "\u{15c}" },
    CharRef { name: "igma;", characters: "\u{3a3}" },
    CharRef { name: "Hcy;", characters: "\u{428}" },
    CharRef { name: "opf;", characters: "\u{1d54a}" },
    CharRef { name: "qrt;", characters: "\u{221a}" },
    CharRef { name: "scr;", characters: "\u{1d4ae}" },
    CharRef { name: "tar;", characters: "\u{22c6}" },
    CharRef { name: "cy;", characters: "\u{421}" },
    CharRef { name: "fr;", characters: "\u{1d516}" },
    CharRef { name: "ub;", characters: "\u{22d0}" },
    CharRef { name: "um;", characters: "\u{2211}" },
    CharRef { name: "up;", characters: "\u{22d1}" },
    CharRef { name: "c;", characters: "\u{2abc}" },
];

static UPPER_T: &[CharRef] = &[
    CharRef { name: "ildeFullEqual;", characters: "\u{2245}" },
    CharRef { name: "hickSpace;", characters: "\u{205f}\u{200a}" },
    CharRef { name: "ildeEqual;", characters: "\u{2243}" },
    CharRef { name: "ildeTilde;", characters: "\u{2248}" },
    CharRef { name: "herefore;", characters: "\u{2234}" },
    CharRef { name: "hinSpace;", characters: "\u{2009}" },
    CharRef { name: "ripleDot;", characters: "\u{20db}" },
    CharRef { name: "caron;", characters: "\u{164}" },
    CharRef { name: "cedil;", characters: "\u{162}" },
    CharRef { name: "strok;", characters: "\u{166}" },
    CharRef { name: "HORN;", characters: "\u{de}" },
    CharRef { name: "RADE;", characters: "\u{2122}" },
    CharRef { name: "SHcy;", characters: "\u{40b}" },
    CharRef { name: "heta;", characters: "\u{398}" },
    CharRef { name: "ilde;", characters: "\u{223c}" },
    CharRef { name: "HORN", characters: "\u{de}" },
    CharRef { name: "Scy;", characters: "\u{426}" },
    CharRef { name: "opf;", characters: "\u{1d54b}" },
    CharRef { name: "scr;", characters: "\u{1d4af}" },
    CharRef { name: "ab;", characters: "\u{9}" },
    CharRef { name: "au;", characters: "\u{3a4}" },
    CharRef { name: "cy;", characters: "\u{422}" },
    CharRef { name: "fr;", characters: "\u{1d517}" },
];

static UPPER_U: &[CharRef] = &[
    CharRef { name: "nderParenthesis;", characters: "\u{23dd}" },
    CharRef { name: "pArrowDownArrow;", characters: "\u{21c5}" },
    CharRef { name: "pperRightArrow;", characters: "\u{2197}" },
    CharRef { name: "pperLeftArrow;", characters: "\u{2196}" },
    CharRef { name: "pEquilibrium;", characters: "\u{296e}" },
    CharRef { name: "nderBracket;", characters: "\u{23b5}" },
    CharRef { name: "pDownArrow;", characters: "\u{2195}" },
    CharRef { name: "pdownarrow;", characters: "\u{21d5}" },
    CharRef { name: "nderBrace;", characters: "\u{23df}" },
    CharRef { name: "pArrowBar;", characters: "\u{2912}" },
    CharRef { name: "pTeeArrow;", characters: "\u{21a5}" },
    CharRef { name: "nionPlus;", characters: "\u{228e}" },
    CharRef { name: "arrocir;", characters: "\u{2949}" },
    CharRef { name: "nderBar;", characters: "_" },
    CharRef { name: "pArrow;", characters: "\u{2191}" },
    CharRef { name: "parrow;", characters: "\u{21d1}" },
    CharRef { name: "psilon;", characters: "\u{3a5}" },
    CharRef { name: "acute;", characters: "\u{da}" },
    CharRef { name: "breve;", characters: "\u{16c}" },
    CharRef { name: "dblac;", characters: "\u{170}" },
    CharRef { name: "grave;", characters: "\u{d9}" },
    CharRef { name: "tilde;", characters: "\u{168}" },
    CharRef { name: "acute", characters: "\u{da}" },
    CharRef { name: "brcy;", characters: "\u{40e}" },
    CharRef { name: "circ;", characters: "\u{db}" },
    CharRef { name: "grave", characters: "\u{d9}" },
    CharRef { name: "macr;", characters: "\u{16a}" },
    CharRef { name: "nion;", characters: "\u{22c3}" },
    CharRef { name: "ogon;", characters: "\u{172}" },
    CharRef { name: "pTee;", characters: "\u{22a5}" },
    CharRef { name: "ring;", characters: "\u{16e}" },
    CharRef { name: "arr;", characters: "\u{219f}" },
    CharRef { name: "circ", characters: "\u{db}" },
    CharRef { name: "opf;", characters: "\u{1d54c}" },
    CharRef { name: "psi;", characters: "\u{3d2}" },
    CharRef { name: "scr;", characters: "\u{1d4b0}" },
    CharRef { name: "uml;", characters: "\u{dc}" },
    CharRef { name: "cy;", characters: "\u{423}" },
    CharRef { name: "fr;", characters: "\u{1d518}" },
    CharRef { name: "uml", characters: "\u{dc}" },
];

static UPPER_V: &[CharRef] = &[
    CharRef { name: "erticalSeparator;", characters: "\u{2758}" },
    CharRef { name: "erticalTilde;", characters: "\u{2240}" },
    CharRef { name: "eryThinSpace;", characters: "\u{200a}" },
    CharRef { name: "erticalLine;", characters: "|" },
    CharRef { name: "erticalBar;", characters: "\u{2223}" },
    CharRef { name: "dashl;", characters: "\u{2ae6}" },
    CharRef { name: "erbar;", characters: "\u{2016}" },
    CharRef { name: "vdash;", characters: "\u{22aa}" },
    CharRef { name: "Dash;", characters: "\u{22ab}" },
    CharRef { name: "dash;", characters: "\u{22a9}" },
    CharRef { name: "bar;", characters: "\u{2aeb}" },
    CharRef { name: "ert;", characters: "\u{2016}" },
    CharRef { name: "opf;", characters: "\u{1d54d}" },
    CharRef { name: "scr;", characters: "\u{1d4b1}" },
    CharRef { name: "cy;", characters: "\u{412}" },
    CharRef { name: "ee;", characters: "\u{22c1}" },
    CharRef { name: "fr;", characters: "\u{1d519}" },
];

static UPPER_W: &[CharRef] = &[
    CharRef { name: "circ;", characters: "\u{174}" },
    CharRef { name: "edge;", characters: "\u{22c0}" },
    CharRef { name: "opf;", characters: "\u{1d54e}" },
    CharRef { name: "scr;", characters: "\u{1d4b2}" },
    CharRef { name: "fr;", characters: "\u{1d51a}" },
];

static UPPER_X: &[CharRef] = &[
    CharRef { name: "opf;", characters: "\u{1d54f}" },
    CharRef { name: "scr;", characters: "\u{1d4b3}" },
    CharRef { name: "fr;", characters: "\u{1d51b}" },
    CharRef { name: "i;", characters: "\u{39e}" },
];

static UPPER_Y: &[CharRef] = &[
    CharRef { name: "acute;", characters: "\u{dd}" },
    CharRef { name: "acute", characters: "\u{dd}" },
    CharRef { name: "circ;", characters: "\u{176}" },
    CharRef { name: "Acy;", characters: "\u{42f}" },
    CharRef { name: "Icy;", characters: "\u{407}" },
    CharRef { name: "Ucy;", characters: "\u{42e}" },
    CharRef { name: "opf;", characters: "\u{1d550}" },
    CharRef { name: "scr;", characters: "\u{1d4b4}" },
    CharRef { name: "uml;", characters: "\u{178}" },
    CharRef { name: "cy;", characters: "\u{42b}" },
    CharRef { name: "fr;", characters: "\u{1d51c}" },
];

static UPPER_Z: &[CharRef] = &[
    CharRef { name: "eroWidthSpace;", characters: "\u{200b}" },
    CharRef { name: "acute;", characters: "\u{179}" },
    CharRef { name: "caron;", characters: "\u{17d}" },
    CharRef { name: "Hcy;", characters: "\u{416}" },
    CharRef { name: "dot;", characters: "\u{17b}" },
    CharRef { name: "eta;", characters: "\u{396}" },
    CharRef { name: "opf;", characters: "\u{2124}" },
    CharRef { name: "scr;", characters: "\u{1d4b5}" },
    CharRef { name: "cy;", characters: "\u{417}" },
    CharRef { name: "fr;", characters: "\u{2128}" },
];

static LOWER_A: &[CharRef] = &[
    CharRef { name: "ndslope;", characters: "\u{2a58}" },
    CharRef { name: "ngmsdaa;", characters: "\u{29a8}" },
    CharRef { name: "ngmsdab;", characters: "\u{29a9}" },
    CharRef { name: "ngmsdac;", characters: "\u{29aa}" },
    CharRef { name: "ngmsdad;", characters: "\u{29ab}" },
    CharRef { name: "ngmsdae;", characters: "\u{29ac}" },
    CharRef { name: "ngmsdaf;", characters: "\u{29ad}" },
    CharRef { name: "ngmsdag;", characters: "\u{29ae}" },
    CharRef { name: "ngmsdah;", characters: "\u{29af}" },
    CharRef { name: "ngrtvbd;", characters: "\u{299d}" },
    CharRef { name: "pproxeq;", characters: "\u{224a}" },
    CharRef { name: "wconint;", characters: "\u{2233}" },
    CharRef { name: "lefsym;", characters: "\u{2135}" },
    CharRef { name: "ngrtvb;", characters: "\u{22be}" },
    CharRef { name: "ngzarr;", characters: "\u{237c}" },
    CharRef { name: "sympeq;", characters: "\u{224d}" },
    CharRef { name: "acute;", characters: "\u{e1}" },
    CharRef { name: "breve;", characters: "\u{103}" },
    CharRef { name: "grave;", characters: "\u{e0}" },
    CharRef { name: "ndand;", characters: "\u{2a55}" },
    CharRef { name: "ngmsd;", characters: "\u{2221}" },
    CharRef { name: "ngsph;", characters: "\u{2222}" },
    CharRef { name: "pacir;", characters: "\u{2a6f}" },
    CharRef { name: "pprox;", characters: "\u{2248}" },
    CharRef { name: "tilde;", characters: "\u{e3}" },
    CharRef { name: "acute", characters: "\u{e1}" },
    CharRef { name: "circ;", characters: "\u{e2}" },
    CharRef { name: "cute;", characters: "\u{b4}" },
    CharRef { name: "elig;", characters: "\u{e6}" },
    CharRef { name: "grave", characters: "\u{e0}" },
    CharRef { name: "leph;", characters: "\u{2135}" },
    CharRef { name: "lpha;", characters: "\u{3b1}" },
    CharRef { name: "macr;", characters: "\u{101}" },
    CharRef { name: "malg;", characters: "\u{2a3f}" },
    CharRef { name: "ngle;", characters: "\u{2220}" },
    CharRef { name: "ngrt;", characters: "\u{221f}" },
    CharRef { name: "ngst;", characters: "\u{c5}" },
    CharRef { name: "ogon;", characters: "\u{105}" },
    CharRef { name: "ring;", characters: "\u{e5}" },
    CharRef { name: "symp;", characters: "\u{2248}" },
    CharRef { name: "tilde", characters: "\u{e3}" },
    CharRef { name: "wint;", characters: "\u{2a11}" },
    CharRef { name: "circ", characters: "\u{e2}" },
    CharRef { name: "cute", characters: "\u{b4}" },
    CharRef { name: "elig", characters: "\u{e6}" },
    CharRef { name: "ndd;", characters: "\u{2a5c}" },
    CharRef { name: "ndv;", characters: "\u{2a5a}" },
    CharRef { name: "nge;", characters: "\u{29a4}" },
    CharRef { name: "opf;", characters: "\u{1d552}" },
    CharRef { name: "pid;", characters: "\u{224b}" },
    CharRef { name: "pos;", characters: "'" },
    CharRef { name: "ring", characters: "\u{e5}" },
    CharRef { name: "scr;", characters: "\u{1d4b6}" },
    CharRef { name: "uml;", characters: "\u{e4}" },
    CharRef { name: "cE;", characters: "\u{223e}\u{333}" },
    CharRef { name: "cd;", characters: "\u{223f}" },
    CharRef { name: "cy;", characters: "\u{430}" },
    CharRef { name: "fr;", characters: "\u{1d51e}" },
    CharRef { name: "mp;", characters: "&" },
    CharRef { name: "nd;", characters: "\u{2227}" },
    CharRef { name: "ng;", characters: "\u{2220}" },
    CharRef { name: "pE;", characters: "\u{2a70}" },
    CharRef { name: "pe;", characters: "\u{224a}" },
    CharRef { name: "st;", characters: "*" },
    CharRef { name: "uml", characters: "\u{e4}" },
    CharRef { name: "c;", characters: "\u{223e}" },
    CharRef { name: "f;", characters: "\u{2061}" },
    CharRef { name: "mp", characters: "&" },
    CharRef { name: "p;", characters: "\u{2248}" },
];

static LOWER_B: &[CharRef] = &[
    CharRef { name: "lacktriangleright;", characters: "\u{25b8}" },
    CharRef { name: "lacktriangledown;", characters: "\u{25be}" },
    CharRef { name: "lacktriangleleft;", characters: "\u{25c2}" },
    CharRef { name: "igtriangledown;", characters: "\u{25bd}" },
    CharRef { name: "igtriangleup;", characters: "\u{25b3}" },
    CharRef { name: "lacktriangle;", characters: "\u{25b4}" },
    CharRef { name: "lacklozenge;", characters: "\u{29eb}" },
    CharRef { name: "ackepsilon;", characters: "\u{3f6}" },
    CharRef { name: "lacksquare;", characters: "\u{25aa}" },
    CharRef { name: "ackprime;", characters: "\u{2035}" },
    CharRef { name: "acksimeq;", characters: "\u{22cd}" },
    CharRef { name: "igotimes;", characters: "\u{2a02}" },
    CharRef { name: "ackcong;", characters: "\u{224c}" },
    CharRef { name: "arwedge;", characters: "\u{2305}" },
    CharRef { name: "brktbrk;", characters: "\u{23b6}" },
    CharRef { name: "igoplus;", characters: "\u{2a01}" },
    CharRef { name: "igsqcup;", characters: "\u{2a06}" },
    CharRef { name: "iguplus;", characters: "\u{2a04}" },
    CharRef { name: "igwedge;", characters: "\u{22c0}" },
    CharRef { name: "oxminus;", characters: "\u{229f}" },
    CharRef { name: "oxtimes;", characters: "\u{22a0}" },
    CharRef { name: "solhsub;", characters: "\u{27c8}" },
    CharRef { name: "acksim;", characters: "\u{223d}" },
    CharRef { name: "ecause;", characters: "\u{2235}" },
    CharRef { name: "emptyv;", characters: "\u{29b0}" },
    CharRef { name: "etween;", characters: "\u{226c}" },
    CharRef { name: "igcirc;", characters: "\u{25ef}" },
    CharRef { name: "igodot;", characters: "\u{2a00}" },
    CharRef { name: "igstar;", characters: "\u{2605}" },
    CharRef { name: "nequiv;", characters: "\u{2261}\u{20e5}" },
    CharRef { name: "oxplus;", characters: "\u{229e}" },
    CharRef { name: "arvee;", characters: "\u{22bd}" },
    CharRef { name: "arwed;", characters: "\u{2305}" },
    CharRef { name: "ecaus;", characters: "\u{2235}" },
    CharRef { name: "ernou;", characters: "\u{212c}" },
    CharRef { name: "igcap;", characters: "\u{22c2}" },
    CharRef { name: "igcup;", characters: "\u{22c3}" },
    CharRef { name: "igvee;", characters: "\u{22c1}" },
    CharRef { name: "karow;", characters: "\u{290d}" },
    CharRef { name: "ottom;", characters: "\u{22a5}" },
    CharRef { name: "owtie;", characters: "\u{22c8}" },
    CharRef { name: "oxbox;", characters: "\u{29c9}" },
    CharRef { name: "prime;", characters: "\u{2035}" },
    CharRef { name: "rvbar;", characters: "\u{a6}" },
    CharRef { name: "ullet;", characters: "\u{2022}" },
    CharRef { name: "umpeq;", characters: "\u{224f}" },
    CharRef { name: "cong;", characters: "\u{224c}" },
    CharRef { name: "dquo;", characters: "\u{201e}" },
    CharRef { name: "epsi;", characters: "\u{3f6}" },
    CharRef { name: "lank;", characters: "\u{2423}" },
    CharRef { name: "lk12;", characters: "\u{2592}" },
    CharRef { name: "lk14;", characters: "\u{2591}" },
    CharRef { name: "lk34;", characters: "\u{2593}" },
    CharRef { name: "lock;", characters: "\u{2588}" },
    CharRef { name: "oxDL;", characters: "\u{2557}" },
    CharRef { name: "oxDR;", characters: "\u{2554}" },
    CharRef { name: "oxDl;", characters: "\u{2556}" },
    CharRef { name: "oxDr;", characters: "\u{2553}" },
    CharRef { name: "oxHD;", characters: "\u{2566}" },
    CharRef { name: "oxHU;", characters: "\u{2569}" },
    CharRef { name: "oxHd;", characters: "\u{2564}" },
    CharRef { name: "oxHu;", characters: "\u{2567}" },
    CharRef { name: "oxUL;", characters: "\u{255d}" },
    CharRef { name: "oxUR;", characters: "\u{255a}" },
    CharRef { name: "oxUl;", characters: "\u{255c}" },
    CharRef { name: "oxUr;", characters: "\u{2559}" },
    CharRef { name: "oxVH;", characters: "\u{256c}" },
    CharRef { name: "oxVL;", characters: "\u{2563}" },
    CharRef { name: "oxVR;", characters: "\u{2560}" },
    CharRef { name: "oxVh;", characters: "\u{256b}" },
    CharRef { name: "oxVl;", characters: "\u{2562}" },
    CharRef { name: "oxVr;", characters: "\u{255f}" },
    CharRef { name: "oxdL;", characters: "\u{2555}" },
    CharRef { name: "oxdR;", characters: "\u{2552}" },
    CharRef { name: "oxdl;", characters: "\u{2510}" },
    CharRef { name: "oxdr;", characters: "\u{250c}" },
    CharRef { name: "oxhD;", characters: "\u{2565}" },
    CharRef { name: "oxhU;", characters: "\u{2568}" },
    CharRef { name: "oxhd;", characters: "\u{252c}" },
    CharRef { name: "oxhu;", characters: "\u{2534}" },
    CharRef { name: "oxuL;", characters: "\u{255b}" },
    CharRef { name: "oxuR;", characters: "\u{2558}" },
    CharRef { name: "oxul;", characters: "\u{2518}" },
    CharRef { name: "oxur;", characters: "\u{2514}" },
    CharRef { name: "oxvH;", characters: "\u{256a}" },
    CharRef { name: "oxvL;", characters: "\u{2561}" },
    CharRef { name: "oxvR;", characters: "\u{255e}" },
    CharRef { name: "oxvh;", characters: "\u{253c}" },
    CharRef { name: "oxvl;", characters: "\u{2524}" },
    CharRef { name: "oxvr;", characters: "\u{251c}" },
    CharRef { name: "reve;", characters: "\u{2d8}" },
    CharRef { name: "rvbar", characters: "\u{a6}" },
    CharRef { name: "semi;", characters: "\u{204f}" },
    CharRef { name: "sime;", characters: "\u{22cd}" },
    CharRef { name: "solb;", characters: "\u{29c5}" },
    CharRef { name: "umpE;", characters: "\u{2aae}" },
    CharRef { name: "umpe;", characters: "\u{224f}" },
    CharRef { name: "Not;", characters: "\u{2aed}" },
    CharRef { name: "brk;", characters: "\u{23b5}" },
    CharRef { name: "eta;", characters: "\u{3b2}" },
    CharRef { name: "eth;", characters: "\u{2136}" },
    CharRef { name: "not;", characters: "\u{2310}" },
    CharRef { name: "opf;", characters: "\u{1d553}" },
    CharRef { name: "oxH;", characters: "\u{2550}" },
    CharRef { name: "oxV;", characters: "\u{2551}" },
    CharRef { name: "oxh;", characters: "\u{2500}" },
    CharRef { name: "oxv;", characters: "\u{2502}" },
    CharRef { name: "scr;", characters: "\u{1d4b7}" },
    CharRef { name: "sim;", characters: "\u{223d}" },
    CharRef { name: "sol;", characters: "\\" },
    CharRef { name: "ull;", characters: "\u{2022}" },
    CharRef { name: "ump;", characters: "\u{224e}" },
    CharRef { name: "cy;", characters: "\u{431}" },
    CharRef { name: "fr;", characters: "\u{1d51f}" },
    CharRef { name: "ne;", characters: "=\u{20e5}" },
    CharRef { name: "ot;", characters: "\u{22a5}" },
];

static LOWER_C: &[CharRef] = &[
    CharRef { name: "irclearrowright;", characters: "\u{21bb}" },
    CharRef { name: "irclearrowleft;", characters: "\u{21ba}" },
    CharRef { name: "urvearrowright;", characters: "\u{21b7}" },
    CharRef { name: "urvearrowleft;", characters: "\u{21b6}" },
    CharRef { name: "ircledcirc;", characters: "\u{229a}" },
    CharRef { name: "ircleddash;", characters: "\u{229d}" },
    CharRef { name: "urlyeqprec;", characters: "\u{22de}" },
    CharRef { name: "urlyeqsucc;", characters: "\u{22df}" },
    CharRef { name: "ircledast;", characters: "\u{229b}" },
    CharRef { name: "omplement;", characters: "\u{2201}" },
    CharRef { name: "urlywedge;", characters: "\u{22cf}" },
    CharRef { name: "enterdot;", characters: "\u{b7}" },
    CharRef { name: "heckmark;", characters: "\u{2713}" },
    CharRef { name: "omplexes;", characters: "\u{2102}" },
    CharRef { name: "apbrcup;", characters: "\u{2a49}" },
    CharRef { name: "ircledR;", characters: "\u{ae}" },
    CharRef { name: "ircledS;", characters: "\u{24c8}" },
    CharRef { name: "irfnint;", characters: "\u{2a10}" },
    CharRef { name: "lubsuit;", characters: "\u{2663}" },
    CharRef { name: "upbrcap;", characters: "\u{2a48}" },
    CharRef { name: "urlyvee;", characters: "\u{22ce}" },
    CharRef { name: "wconint;", characters: "\u{2232}" },
    CharRef { name: "cupssm;", characters: "\u{2a50}" },
    CharRef { name: "emptyv;", characters: "\u{29b2}" },
    CharRef { name: "irscir;", characters: "\u{29c2}" },
    CharRef { name: "oloneq;", characters: "\u{2254}" },
    CharRef { name: "ongdot;", characters: "\u{2a6d}" },
    CharRef { name: "udarrl;", characters: "\u{2938}" },
    CharRef { name: "udarrr;", characters: "\u{2935}" },
    CharRef { name: "ularrp;", characters: "\u{293d}" },
    CharRef { name: "urarrm;", characters: "\u{293c}" },
    CharRef { name: "acute;", characters: "\u{107}" },
    CharRef { name: "apand;", characters: "\u{2a44}" },
    CharRef { name: "apcap;", characters: "\u{2a4b}" },
    CharRef { name: "apcup;", characters: "\u{2a47}" },
    CharRef { name: "apdot;", characters: "\u{2a40}" },
    CharRef { name: "caron;", characters: "\u{10d}" },
    CharRef { name: "cedil;", characters: "\u{e7}" },
    CharRef { name: "irceq;", characters: "\u{2257}" },
    CharRef { name: "irmid;", characters: "\u{2aef}" },
    CharRef { name: "olone;", characters: "\u{2254}" },
    CharRef { name: "ommat;", characters: "@" },
    CharRef { name: "ompfn;", characters: "\u{2218}" },
    CharRef { name: "onint;", characters: "\u{222e}" },
    CharRef { name: "oprod;", characters: "\u{2210}" },
    CharRef { name: "opysr;", characters: "\u{2117}" },
    CharRef { name: "ularr;", characters: "\u{21b6}" },
    CharRef { name: "upcap;", characters: "\u{2a46}" },
    CharRef { name: "upcup;", characters: "\u{2a4a}" },
    CharRef { name: "updot;", characters: "\u{228d}" },
    CharRef { name: "urarr;", characters: "\u{21b7}" },
    CharRef { name: "urren;", characters: "\u{a4}" },
    CharRef { name: "ylcty;", characters: "\u{232d}" },
    CharRef { name: "aret;", characters: "\u{2041}" },
    CharRef { name: "aron;", characters: "\u{2c7}" },
    CharRef { name: "caps;", characters: "\u{2a4d}" },
    CharRef { name: "cedil", characters: "\u{e7}" },
    CharRef { name: "circ;", characters: "\u{109}" },
    CharRef { name: "cups;", characters: "\u{2a4c}" },
    CharRef { name: "edil;", characters: "\u{b8}" },
    CharRef { name: "heck;", characters: "\u{2713}" },
    CharRef { name: "lubs;", characters: "\u{2663}" },
    CharRef { name: "olon;", characters: ":" },
    CharRef { name: "omma;", characters: "," },
    CharRef { name: "rarr;", characters: "\u{21b5}" },
    CharRef { name: "ross;", characters: "\u{2717}" },
    CharRef { name: "sube;", characters: "\u{2ad1}" },
    CharRef { name: "supe;", characters: "\u{2ad2}" },
    CharRef { name: "tdot;", characters: "\u{22ef}" },
    CharRef { name: "uepr;", characters: "\u{22de}" },
    CharRef { name: "uesc;", characters: "\u{22df}" },
    CharRef { name: "upor;", characters: "\u{2a45}" },
    CharRef { name: "urren", characters: "\u{a4}" },
    CharRef { name: "uvee;", characters: "\u{22ce}" },
    CharRef { name: "uwed;", characters: "\u{22cf}" },
    CharRef { name: "wint;", characters: "\u{2231}" },
    CharRef { name: "aps;", characters: "\u{2229}\u{fe00}" },
    CharRef { name: "dot;", characters: "\u{10b}" },
    CharRef { name: "edil", characters: "\u{b8}" },
    CharRef { name: "ent;", characters: "\u{a2}" },
    CharRef { name: "hcy;", characters: "\u{447}" },
    CharRef { name: "irE;", characters: "\u{29c3}" },
    CharRef { name: "irc;", characters: "\u{2c6}" },
    CharRef { name: "ire;", characters: "\u{2257}" },
    CharRef { name: "omp;", characters: "\u{2201}" },
    CharRef { name: "ong;", characters: "\u{2245}" },
    CharRef { name: "opf;", characters: "\u{1d554}" },
    CharRef { name: "opy;", characters: "\u{a9}" },
    CharRef { name: "scr;", characters: "\u{1d4b8}" },
    CharRef { name: "sub;", characters: "\u{2acf}" },
    CharRef { name: "sup;", characters: "\u{2ad0}" },
    CharRef { name: "ups;", characters: "\u{222a}\u{fe00}" },
    CharRef { name: "ap;", characters: "\u{2229}" },
    CharRef { name: "ent", characters: "\u{a2}" },
    CharRef { name: "fr;", characters: "\u{1d520}" },
    CharRef { name: "hi;", characters: "\u{3c7}" },
    CharRef { name: "ir;", characters: "\u{25cb}" },
    CharRef { name: "opy", characters: "\u{a9}" },
    CharRef { name: "up;", characters: "\u{222a}" },
];

static LOWER_D: &[CharRef] = &[
    CharRef { name: "ownharpoonright;", characters: "\u{21c2}" },
    CharRef { name: "ownharpoonleft;", characters: "\u{21c3}" },
    CharRef { name: "oublebarwedge;", characters: "\u{2306}" },
    CharRef { name: "owndownarrows;", characters: "\u{21ca}" },
    CharRef { name: "ivideontimes;", characters: "\u{22c7}" },
    CharRef { name: "iamondsuit;", characters: "\u{2666}" },
    CharRef { name: "otsquare;", characters: "\u{22a1}" },
    CharRef { name: "ownarrow;", characters: "\u{2193}" },
    CharRef { name: "oteqdot;", characters: "\u{2251}" },
    CharRef { name: "otminus;", characters: "\u{2238}" },
    CharRef { name: "rbkarow;", characters: "\u{2910}" },
    CharRef { name: "zigrarr;", characters: "\u{27ff}" },
    CharRef { name: "bkarow;", characters: "\u{290f}" },
    CharRef { name: "dagger;", characters: "\u{2021}" },
    CharRef { name: "dotseq;", characters: "\u{2a77}" },
    CharRef { name: "emptyv;", characters: "\u{29b1}" },
    CharRef { name: "iamond;", characters: "\u{22c4}" },
    CharRef { name: "igamma;", characters: "\u{3dd}" },
    CharRef { name: "otplus;", characters: "\u{2214}" },
    CharRef { name: "wangle;", characters: "\u{29a6}" },
    CharRef { name: "agger;", characters: "\u{2020}" },
    CharRef { name: "aleth;", characters: "\u{2138}" },
    CharRef { name: "caron;", characters: "\u{10f}" },
    CharRef { name: "fisht;", characters: "\u{297f}" },
    CharRef { name: "ivide;", characters: "\u{f7}" },
    CharRef { name: "ivonx;", characters: "\u{22c7}" },
    CharRef { name: "lcorn;", characters: "\u{231e}" },
    CharRef { name: "lcrop;", characters: "\u{230d}" },
    CharRef { name: "ollar;", characters: "$" },
    CharRef { name: "rcorn;", characters: "\u{231f}" },
    CharRef { name: "rcrop;", characters: "\u{230c}" },
    CharRef { name: "strok;", characters: "\u{111}" },
    CharRef { name: "ashv;", characters: "\u{22a3}" },
    CharRef { name: "blac;", characters: "\u{2dd}" },
    CharRef { name: "darr;", characters: "\u{21ca}" },
    CharRef { name: "elta;", characters: "\u{3b4}" },
    CharRef { name: "harl;", characters: "\u{21c3}" },
    CharRef { name: "harr;", characters: "\u{21c2}" },
    CharRef { name: "iams;", characters: "\u{2666}" },
    CharRef { name: "isin;", characters: "\u{22f2}" },
    CharRef { name: "ivide", characters: "\u{f7}" },
    CharRef { name: "oteq;", characters: "\u{2250}" },
    CharRef { name: "tdot;", characters: "\u{22f1}" },
    CharRef { name: "trif;", characters: "\u{25be}" },
    CharRef { name: "uarr;", characters: "\u{21f5}" },
    CharRef { name: "uhar;", characters: "\u{296f}" },
    CharRef { name: "Arr;", characters: "\u{21d3}" },
    CharRef { name: "Har;", characters: "\u{2965}" },
    CharRef { name: "arr;", characters: "\u{2193}" },
    CharRef { name: "ash;", characters: "\u{2010}" },
    CharRef { name: "iam;", characters: "\u{22c4}" },
    CharRef { name: "jcy;", characters: "\u{452}" },
    CharRef { name: "opf;", characters: "\u{1d555}" },
    CharRef { name: "scr;", characters: "\u{1d4b9}" },
    CharRef { name: "scy;", characters: "\u{455}" },
    CharRef { name: "sol;", characters: "\u{29f6}" },
    CharRef { name: "tri;", characters: "\u{25bf}" },
    CharRef { name: "zcy;", characters: "\u{45f}" },
    CharRef { name: "cy;", characters: "\u{434}" },
    CharRef { name: "eg;", characters: "\u{b0}" },
    CharRef { name: "fr;", characters: "\u{1d521}" },
    CharRef { name: "ie;", characters: "\u{a8}" },
    CharRef { name: "iv;", characters: "\u{f7}" },
    CharRef { name: "ot;", characters: "\u{2d9}" },
    CharRef { name: "d;", characters: "\u{2146}" },
    CharRef { name: "eg", characters: "\u{b0}" },
];

static LOWER_E: &[CharRef] = &[
    CharRef { name: "xponentiale;", characters: "\u{2147}" },
    CharRef { name: "qslantless;", characters: "\u{2a95}" },
    CharRef { name: "xpectation;", characters: "\u{2130}" },
    CharRef { name: "qslantgtr;", characters: "\u{2a96}" },
    CharRef { name: "linters;", characters: "\u{23e7}" },
    CharRef { name: "mptyset;", characters: "\u{2205}" },
    CharRef { name: "qvparsl;", characters: "\u{29e5}" },
    CharRef { name: "psilon;", characters: "\u{3b5}" },
    CharRef { name: "qcolon;", characters: "\u{2255}" },
    CharRef { name: "quivDD;", characters: "\u{2a78}" },
    CharRef { name: "acute;", characters: "\u{e9}" },
    CharRef { name: "aster;", characters: "\u{2a6e}" },
    CharRef { name: "caron;", characters: "\u{11b}" },
    CharRef { name: "colon;", characters: "\u{2255}" },
    CharRef { name: "grave;", characters: "\u{e8}" },
    CharRef { name: "gsdot;", characters: "\u{2a98}" },
    CharRef { name: "lsdot;", characters: "\u{2a97}" },
    CharRef { name: "mptyv;", characters: "\u{2205}" },
    CharRef { name: "msp13;", characters: "\u{2004}" },
    CharRef { name: "msp14;", characters: "\u{2005}" },
    CharRef { name: "parsl;", characters: "\u{29e3}" },
    CharRef { name: "qcirc;", characters: "\u{2256}" },
    CharRef { name: "quals;", characters: "=" },
    CharRef { name: "quest;", characters: "\u{225f}" },
    CharRef { name: "DDot;", characters: "\u{2a77}" },
    CharRef { name: "acute", characters: "\u{e9}" },
    CharRef { name: "circ;", characters: "\u{ea}" },
    CharRef { name: "fDot;", characters: "\u{2252}" },
    CharRef { name: "grave", characters: "\u{e8}" },
    CharRef { name: "macr;", characters: "\u{113}" },
    CharRef { name: "mpty;", characters: "\u{2205}" },
    CharRef { name: "ogon;", characters: "\u{119}" },
    CharRef { name: "plus;", characters: "\u{2a71}" },
    CharRef { name: "psiv;", characters: "\u{3f5}" },
    CharRef { name: "qsim;", characters: "\u{2242}" },
    CharRef { name: "quiv;", characters: "\u{2261}" },
    CharRef { name: "rDot;", characters: "\u{2253}" },
    CharRef { name: "rarr;", characters: "\u{2971}" },
    CharRef { name: "sdot;", characters: "\u{2250}" },
    CharRef { name: "xist;", characters: "\u{2203}" },
    CharRef { name: "Dot;", characters: "\u{2251}" },
    CharRef { name: "cir;", characters: "\u{2256}" },
    CharRef { name: "circ", characters: "\u{ea}" },
    CharRef { name: "dot;", characters: "\u{117}" },
    CharRef { name: "msp;", characters: "\u{2003}" },
    CharRef { name: "nsp;", characters: "\u{2002}" },
    CharRef { name: "opf;", characters: "\u{1d556}" },
    CharRef { name: "par;", characters: "\u{22d5}" },
    CharRef { name: "psi;", characters: "\u{3b5}" },
    CharRef { name: "scr;", characters: "\u{212f}" },
    CharRef { name: "sim;", characters: "\u{2242}" },
    CharRef { name: "uml;", characters: "\u{eb}" },
    CharRef { name: "uro;", characters: "\u{20ac}" },
    CharRef { name: "xcl;", characters: "!" },
    CharRef { name: "cy;", characters: "\u{44d}" },
    CharRef { name: "fr;", characters: "\u{1d522}" },
    CharRef { name: "gs;", characters: "\u{2a96}" },
    CharRef { name: "ll;", characters: "\u{2113}" },
    CharRef { name: "ls;", characters: "\u{2a95}" },
    CharRef { name: "ng;", characters: "\u{14b}" },
    CharRef { name: "ta;", characters: "\u{3b7}" },
    CharRef { name: "th;", characters: "\u{f0}" },
    CharRef { name: "uml", characters: "\u{eb}" },
    CharRef { name: "e;", characters: "\u{2147}" },
    CharRef { name: "g;", characters: "\u{2a9a}" },
    CharRef { name: "l;", characters: "\u{2a99}" },
    CharRef { name: "th", characters: "\u{f0}" },
];

static LOWER_F: &[CharRef] = &[
    CharRef { name: "allingdotseq;", characters: "\u{2252}" },
    CharRef { name: "partint;", characters: "\u{2a0d}" },
    CharRef { name: "emale;", characters: "\u{2640}" },
    CharRef { name: "filig;", characters: "\u{fb03}" },
    CharRef { name: "fllig;", characters: "\u{fb04}" },
    CharRef { name: "orall;", characters: "\u{2200}" },
    CharRef { name: "rac12;", characters: "\u{bd}" },
    CharRef { name: "rac13;", characters: "\u{2153}" },
    CharRef { name: "rac14;", characters: "\u{bc}" },
    CharRef { name: "rac15;", characters: "\u{2155}" },
    CharRef { name: "rac16;", characters: "\u{2159}" },
    CharRef { name: "rac18;", characters: "\u{215b}" },
    CharRef { name: "rac23;", characters: "\u{2154}" },
    CharRef { name: "rac25;", characters: "\u{2156}" },
    CharRef { name: "rac34;", characters: "\u{be}" },
    CharRef { name: "rac35;", characters: "\u{2157}" },
    CharRef { name: "rac38;", characters: "\u{215c}" },
    CharRef { name: "rac45;", characters: "\u{2158}" },
    CharRef { name: "rac56;", characters: "\u{215a}" },
    CharRef { name: "rac58;", characters: "\u{215d}" },
    CharRef { name: "rac78;", characters: "\u{215e}" },
    CharRef { name: "flig;", characters: "\u{fb00}" },
    CharRef { name: "ilig;", characters: "\u{fb01}" },
    CharRef { name: "jlig;", characters: "fj" },
    CharRef { name: "llig;", characters: "\u{fb02}" },
    CharRef { name: "ltns;", characters: "\u{25b1}" },
    CharRef { name: "orkv;", characters: "\u{2ad9}" },
    CharRef { name: "rac12", characters: "\u{bd}" },
    CharRef { name: "rac14", characters: "\u{bc}" },
    CharRef { name: "rac34", characters: "\u{be}" },
    CharRef { name: "rasl;", characters: "\u{2044}" },
    CharRef { name: "rown;", characters: "\u{2322}" },
    CharRef { name: "lat;", characters: "\u{266d}" },
    CharRef { name: "nof;", characters: "\u{192}" },
    CharRef { name: "opf;", characters: "\u{1d557}" },
    CharRef { name: "ork;", characters: "\u{22d4}" },
    CharRef { name: "scr;", characters: "\u{1d4bb}" },
    CharRef { name: "cy;", characters: "\u{444}" },
    CharRef { name: "fr;", characters: "\u{1d523}" },
];

static LOWER_G: &[CharRef] = &[
    CharRef { name: "treqqless;", characters: "\u{2a8c}" },
    CharRef { name: "trapprox;", characters: "\u{2a86}" },
    CharRef { name: "treqless;", characters: "\u{22db}" },
    CharRef { name: "vertneqq;", characters: "\u{2269}\u{fe00}" },
    CharRef { name: "eqslant;", characters: "\u{2a7e}" },
    CharRef { name: "esdotol;", characters: "\u{2a84}" },
    CharRef { name: "napprox;", characters: "\u{2a8a}" },
    CharRef { name: "esdoto;", characters: "\u{2a82}" },
    CharRef { name: "tquest;", characters: "\u{2a7c}" },
    CharRef { name: "trless;", characters: "\u{2277}" },
    CharRef { name: "acute;", characters: "\u{1f5}" },
    CharRef { name: "ammad;", characters: "\u{3dd}" },
    CharRef { name: "breve;", characters: "\u{11f}" },
    CharRef { name: "esdot;", characters: "\u{2a80}" },
    CharRef { name: "esles;", characters: "\u{2a94}" },
    CharRef { name: "tlPar;", characters: "\u{2995}" },
    CharRef { name: "trarr;", characters: "\u{2978}" },
    CharRef { name: "trdot;", characters: "\u{22d7}" },
    CharRef { name: "trsim;", characters: "\u{2273}" },
    CharRef { name: "amma;", characters: "\u{3b3}" },
    CharRef { name: "circ;", characters: "\u{11d}" },
    CharRef { name: "escc;", characters: "\u{2aa9}" },
    CharRef { name: "imel;", characters: "\u{2137}" },
    CharRef { name: "neqq;", characters: "\u{2269}" },
    CharRef { name: "nsim;", characters: "\u{22e7}" },
    CharRef { name: "rave;", characters: "`" },
    CharRef { name: "sime;", characters: "\u{2a8e}" },
    CharRef { name: "siml;", characters: "\u{2a90}" },
    CharRef { name: "tcir;", characters: "\u{2a7a}" },
    CharRef { name: "tdot;", characters: "\u{22d7}" },
    CharRef { name: "dot;", characters: "\u{121}" },
    CharRef { name: "eqq;", characters: "\u{2267}" },
    CharRef { name: "esl;", characters: "\u{22db}\u{fe00}" },
    CharRef { name: "jcy;", characters: "\u{453}" },
    CharRef { name: "nap;", characters: "\u{2a8a}" },
    CharRef { name: "neq;", characters: "\u{2a88}" },
    CharRef { name: "opf;", characters: "\u{1d558}" },
    CharRef { name: "scr;", characters: "\u{210a}" },
    CharRef { name: "sim;", characters: "\u{2273}" },
    CharRef { name: "tcc;", characters: "\u{2aa7}" },
    CharRef { name: "vnE;", characters: "\u{2269}\u{fe00}" },
    CharRef { name: "El;", characters: "\u{2a8c}" },
    CharRef { name: "ap;", characters: "\u{2a86}" },
    CharRef { name: "cy;", characters: "\u{433}" },
    CharRef { name: "el;", characters: "\u{22db}" },
    CharRef { name: "eq;", characters: "\u{2265}" },
    CharRef { name: "es;", characters: "\u{2a7e}" },
    CharRef { name: "fr;", characters: "\u{1d524}" },
    CharRef { name: "gg;", characters: "\u{22d9}" },
    CharRef { name: "lE;", characters: "\u{2a92}" },
    CharRef { name: "la;", characters: "\u{2aa5}" },
    CharRef { name: "lj;", characters: "\u{2aa4}" },
    CharRef { name: "nE;", characters: "\u{2269}" },
    CharRef { name: "ne;", characters: "\u{2a88}" },
    CharRef { name: "E;", characters: "\u{2267}" },
    CharRef { name: "e;", characters: "\u{2265}" },
    CharRef { name: "g;", characters: "\u{226b}" },
    CharRef { name: "l;", characters: "\u{2277}" },
    CharRef { name: "t;", characters: ">" },
    CharRef { name: "t", characters: ">" },
];

static LOWER_H: &[CharRef] = &[
    CharRef { name: "ookrightarrow;", characters: "\u{21aa}" },
    CharRef { name: "ookleftarrow;", characters: "\u{21a9}" },
    CharRef { name: "eartsuit;", characters: "\u{2665}" },
    CharRef { name: "ksearow;", characters: "\u{2925}" },
    CharRef { name: "kswarow;", characters: "\u{2926}" },
    CharRef { name: "arrcir;", characters: "\u{2948}" },
    CharRef { name: "airsp;", characters: "\u{200a}" },
    CharRef { name: "amilt;", characters: "\u{210b}" },
    CharRef { name: "ardcy;", characters: "\u{44a}" },
    CharRef { name: "earts;", characters: "\u{2665}" },
    CharRef { name: "ellip;", characters: "\u{2026}" },
    CharRef { name: "ercon;", characters: "\u{22b9}" },
    CharRef { name: "omtht;", characters: "\u{223b}" },
    CharRef { name: "orbar;", characters: "\u{2015}" },
    CharRef { name: "slash;", characters: "\u{210f}" },
    CharRef { name: "strok;", characters: "\u{127}" },
    CharRef { name: "ybull;", characters: "\u{2043}" },
    CharRef { name: "yphen;", characters: "\u{2010}" },
    CharRef { name: "arrw;", characters: "\u{21ad}" },
    CharRef { name: "circ;", characters: "\u{125}" },
    CharRef { name: "oarr;", characters: "\u{21ff}" },
    CharRef { name: "Arr;", characters: "\u{21d4}" },
    CharRef { name: "alf;", characters: "\u{bd}" },
    CharRef { name: "arr;", characters: "\u{2194}" },
    CharRef { name: "bar;", characters: "\u{210f}" },
    CharRef { name: "opf;", characters: "\u{1d559}" },
    CharRef { name: "scr;", characters: "\u{1d4bd}" },
    CharRef { name: "fr;", characters: "\u{1d525}" },
];

static LOWER_I: &[CharRef] = &[
    CharRef { name: "magline;", characters: "\u{2110}" },
    CharRef { name: "magpart;", characters: "\u{2111}" },
    CharRef { name: "nfintie;", characters: "\u{29dd}" },
    CharRef { name: "ntegers;", characters: "\u{2124}" },
    CharRef { name: "ntercal;", characters: "\u{22ba}" },
    CharRef { name: "ntlarhk;", characters: "\u{2a17}" },
    CharRef { name: "ntprod;", characters: "\u{2a3c}" },
    CharRef { name: "sindot;", characters: "\u{22f5}" },
    CharRef { name: "acute;", characters: "\u{ed}" },
    CharRef { name: "grave;", characters: "\u{ec}" },
    CharRef { name: "iiint;", characters: "\u{2a0c}" },
    CharRef { name: "infin;", characters: "\u{29dc}" },
    CharRef { name: "ncare;", characters: "\u{2105}" },
    CharRef { name: "nodot;", characters: "\u{131}" },
    CharRef { name: "ntcal;", characters: "\u{22ba}" },
    CharRef { name: "quest;", characters: "\u{bf}" },
    CharRef { name: "sinsv;", characters: "\u{22f3}" },
    CharRef { name: "tilde;", characters: "\u{129}" },
    CharRef { name: "acute", characters: "\u{ed}" },
    CharRef { name: "circ;", characters: "\u{ee}" },
    CharRef { name: "excl;", characters: "\u{a1}" },
    CharRef { name: "grave", characters: "\u{ec}" },
    CharRef { name: "iint;", characters: "\u{222d}" },
    CharRef { name: "iota;", characters: "\u{2129}" },
    CharRef { name: "jlig;", characters: "\u{133}" },
    CharRef { name: "macr;", characters: "\u{12b}" },
    CharRef { name: "mage;", characters: "\u{2111}" },
    CharRef { name: "math;", characters: "\u{131}" },
    CharRef { name: "mped;", characters: "\u{1b5}" },
    CharRef { name: "nfin;", characters: "\u{221e}" },
    CharRef { name: "ogon;", characters: "\u{12f}" },
    CharRef { name: "prod;", characters: "\u{2a3c}" },
    CharRef { name: "quest", characters: "\u{bf}" },
    CharRef { name: "sinE;", characters: "\u{22f9}" },
    CharRef { name: "sins;", characters: "\u{22f4}" },
    CharRef { name: "sinv;", characters: "\u{2208}" },
    CharRef { name: "ukcy;", characters: "\u{456}" },
    CharRef { name: "circ", characters: "\u{ee}" },
    CharRef { name: "ecy;", characters: "\u{435}" },
    CharRef { name: "excl", characters: "\u{a1}" },
    CharRef { name: "mof;", characters: "\u{22b7}" },
    CharRef { name: "ocy;", characters: "\u{451}" },
    CharRef { name: "opf;", characters: "\u{1d55a}" },
    CharRef { name: "ota;", characters: "\u{3b9}" },
    CharRef { name: "scr;", characters: "\u{1d4be}" },
    CharRef { name: "sin;", characters: "\u{2208}" },
    CharRef { name: "uml;", characters: "\u{ef}" },
    CharRef { name: "cy;", characters: "\u{438}" },
    CharRef { name: "ff;", characters: "\u{21d4}" },
    CharRef { name: "fr;", characters: "\u{1d526}" },
    CharRef { name: "nt;", characters: "\u{222b}" },
    CharRef { name: "uml", characters: "\u{ef}" },
    CharRef { name: "c;", characters: "\u{2063}" },
    CharRef { name: "i;", characters: "\u{2148}" },
    CharRef { name: "n;", characters: "\u{2208}" },
    CharRef { name: "t;", characters: "\u{2062}" },
];

static LOWER_J: &[CharRef] = &[
    CharRef { name: "sercy;", characters: "\u{458}" },
    CharRef { name: "circ;", characters: "\u{135}" },
    CharRef { name: "math;", characters: "\u{237}" },
    CharRef { name: "ukcy;", characters: "\u{454}" },
    CharRef { name: "opf;", characters: "\u{1d55b}" },
    CharRef { name: "scr;", characters: "\u{1d4bf}" },
    CharRef { name: "cy;", characters: "\u{439}" },
    CharRef { name: "fr;", characters: "\u{1d527}" },
];

static LOWER_K: &[CharRef] = &[
    CharRef { name: "appav;", characters: "\u{3f0}" },
    CharRef { name: "cedil;", characters: "\u{137}" },
    CharRef { name: "green;", characters: "\u{138}" },
    CharRef { name: "appa;", characters: "\u{3ba}" },
    CharRef { name: "hcy;", characters: "\u{445}" },
    CharRef { name: "jcy;", characters: "\u{45c}" },
    CharRef { name: "opf;", characters: "\u{1d55c}" },
    CharRef { name: "scr;", characters: "\u{1d4c0}" },
    CharRef { name: "cy;", characters: "\u{43a}" },
    CharRef { name: "fr;", characters: "\u{1d528}" },
];

static LOWER_L: &[CharRef] = &[
    CharRef { name: "eftrightsquigarrow;", characters: "\u{21ad}" },
    CharRef { name: "ongleftrightarrow;", characters: "\u{27f7}" },
    CharRef { name: "eftrightharpoons;", characters: "\u{21cb}" },
    CharRef { name: "eftharpoondown;", characters: "\u{21bd}" },
    CharRef { name: "eftrightarrows;", characters: "\u{21c6}" },
    CharRef { name: "eftleftarrows;", characters: "\u{21c7}" },
    CharRef { name: "eftrightarrow;", characters: "\u{2194}" },
    CharRef { name: "eftthreetimes;", characters: "\u{22cb}" },
    CharRef { name: "ongrightarrow;", characters: "\u{27f6}" },
    CharRef { name: "ooparrowright;", characters: "\u{21ac}" },
    CharRef { name: "eftarrowtail;", characters: "\u{21a2}" },
    CharRef { name: "eftharpoonup;", characters: "\u{21bc}" },
    CharRef { name: "ongleftarrow;", characters: "\u{27f5}" },
    CharRef { name: "ooparrowleft;", characters: "\u{21ab}" },
    CharRef { name: "essapprox;", characters: "\u{2a85}" },
    CharRef { name: "esseqqgtr;", characters: "\u{2a8b}" },
    CharRef { name: "moustache;", characters: "\u{23b0}" },
    CharRef { name: "ongmapsto;", characters: "\u{27fc}" },
    CharRef { name: "eftarrow;", characters: "\u{2190}" },
    CharRef { name: "esseqgtr;", characters: "\u{22da}" },
    CharRef { name: "vertneqq;", characters: "\u{2268}\u{fe00}" },
    CharRef { name: "aemptyv;", characters: "\u{29b4}" },
    CharRef { name: "drushar;", characters: "\u{294b}" },
    CharRef { name: "eqslant;", characters: "\u{2a7d}" },
    CharRef { name: "esdotor;", characters: "\u{2a83}" },
    CharRef { name: "lcorner;", characters: "\u{231e}" },
    CharRef { name: "napprox;", characters: "\u{2a89}" },
    CharRef { name: "rcorner;", characters: "\u{231f}" },
    CharRef { name: "urdshar;", characters: "\u{294a}" },
    CharRef { name: "arrbfs;", characters: "\u{291f}" },
    CharRef { name: "arrsim;", characters: "\u{2973}" },
    CharRef { name: "brksld;", characters: "\u{298f}" },
    CharRef { name: "brkslu;", characters: "\u{298d}" },
    CharRef { name: "drdhar;", characters: "\u{2967}" },
    CharRef { name: "esdoto;", characters: "\u{2a81}" },
    CharRef { name: "essdot;", characters: "\u{22d6}" },
    CharRef { name: "essgtr;", characters: "\u{2276}" },
    CharRef { name: "esssim;", characters: "\u{2272}" },
    CharRef { name: "otimes;", characters: "\u{2a34}" },
    CharRef { name: "ozenge;", characters: "\u{25ca}" },
    CharRef { name: "tquest;", characters: "\u{2a7b}" },
    CharRef { name: "uruhar;", characters: "\u{2966}" },
    CharRef { name: "Atail;", characters: "\u{291b}" },
    CharRef { name: "acute;", characters: "\u{13a}" },
    CharRef { name: "agran;", characters: "\u{2112}" },
    CharRef { name: "ambda;", characters: "\u{3bb}" },
    CharRef { name: "angle;", characters: "\u{27e8}" },
    CharRef { name: "arrfs;", characters: "\u{291d}" },
    CharRef { name: "arrhk;", characters: "\u{21a9}" },
    CharRef { name: "arrlp;", characters: "\u{21ab}" },
    CharRef { name: "arrpl;", characters: "\u{2939}" },
    CharRef { name: "arrtl;", characters: "\u{21a2}" },
    CharRef { name: "atail;", characters: "\u{2919}" },
    CharRef { name: "brace;", characters: "{" },
    CharRef { name: "brack;", characters: "[" },
    CharRef { name: "caron;", characters: "\u{13e}" },
    CharRef { name: "cedil;", characters: "\u{13c}" },
    CharRef { name: "dquor;", characters: "\u{201e}" },
    CharRef { name: "esdot;", characters: "\u{2a7f}" },
    CharRef { name: "esges;", characters: "\u{2a93}" },
    CharRef { name: "fisht;", characters: "\u{297c}" },
    CharRef { name: "floor;", characters: "\u{230a}" },
    CharRef { name: "harul;", characters: "\u{296a}" },
    CharRef { name: "lhard;", characters: "\u{296b}" },
    CharRef { name: "midot;", characters: "\u{140}" },
    CharRef { name: "moust;", characters: "\u{23b0}" },
    CharRef { name: "oplus;", characters: "\u{2a2d}" },
    CharRef { name: "owast;", characters: "\u{2217}" },
    CharRef { name: "owbar;", characters: "_" },
    CharRef { name: "parlt;", characters: "\u{2993}" },
    CharRef { name: "rhard;", characters: "\u{296d}" },
    CharRef { name: "saquo;", characters: "\u{2039}" },
    CharRef { name: "squor;", characters: "\u{201a}" },
    CharRef { name: "strok;", characters: "\u{142}" },
    CharRef { name: "three;", characters: "\u{22cb}" },
    CharRef { name: "times;", characters: "\u{22c9}" },
    CharRef { name: "tlarr;", characters: "\u{2976}" },
    CharRef { name: "trPar;", characters: "\u{2996}" },
    CharRef { name: "Aarr;", characters: "\u{21da}" },
    CharRef { name: "Barr;", characters: "\u{290e}" },
    CharRef { name: "angd;", characters: "\u{2991}" },
    CharRef { name: "aquo;", characters: "\u{ab}" },
    CharRef { name: "arrb;", characters: "\u{21e4}" },
    CharRef { name: "ates;", characters: "\u{2aad}\u{fe00}" },
    CharRef { name: "barr;", characters: "\u{290c}" },
    CharRef { name: "bbrk;", characters: "\u{2772}" },
    CharRef { name: "brke;", characters: "\u{298b}" },
    CharRef { name: "ceil;", characters: "\u{2308}" },
    CharRef { name: "dquo;", characters: "\u{201c}" },
    CharRef { name: "escc;", characters: "\u{2aa8}" },
    CharRef { name: "hard;", characters: "\u{21bd}" },
    CharRef { name: "haru;", characters: "\u{21bc}" },
    CharRef { name: "hblk;", characters: "\u{2584}" },
    CharRef { name: "larr;", characters: "\u{21c7}" },
    CharRef { name: "ltri;", characters: "\u{25fa}" },
    CharRef { name: "neqq;", characters: "\u{2268}" },
    CharRef { name: "nsim;", characters: "\u{22e6}" },
    CharRef { name: "oang;", characters: "\u{27ec}" },
    CharRef { name: "oarr;", characters: "\u{21fd}" },
    CharRef { name: "obrk;", characters: "\u{27e6}" },
    CharRef { name: "opar;", characters: "\u{2985}" },
    CharRef { name: "rarr;", characters: "\u{21c6}" },
    CharRef { name: "rhar;", characters: "\u{21cb}" },
    CharRef { name: "rtri;", characters: "\u{22bf}" },
    CharRef { name: "sime;", characters: "\u{2a8d}" },
    CharRef { name: "simg;", characters: "\u{2a8f}" },
    CharRef { name: "squo;", characters: "\u{2018}" },
    CharRef { name: "tcir;", characters: "\u{2a79}" },
    CharRef { name: "tdot;", characters: "\u{22d6}" },
    CharRef { name: "trie;", characters: "\u{22b4}" },
    CharRef { name: "trif;", characters: "\u{25c2}" },
    CharRef { name: "Arr;", characters: "\u{21d0}" },
    CharRef { name: "Har;", characters: "\u{2962}" },
    CharRef { name: "ang;", characters: "\u{27e8}" },
    CharRef { name: "aquo", characters: "\u{ab}" },
    CharRef { name: "arr;", characters: "\u{2190}" },
    CharRef { name: "ate;", characters: "\u{2aad}" },
    CharRef { name: "cub;", characters: "{" },
    CharRef { name: "dca;", characters: "\u{2936}" },
    CharRef { name: "dsh;", characters: "\u{21b2}" },
    CharRef { name: "eqq;", characters: "\u{2266}" },
    CharRef { name: "esg;", characters: "\u{22da}\u{fe00}" },
    CharRef { name: "jcy;", characters: "\u{459}" },
    CharRef { name: "nap;", characters: "\u{2a89}" },
    CharRef { name: "neq;", characters: "\u{2a87}" },
    CharRef { name: "opf;", characters: "\u{1d55d}" },
    CharRef { name: "ozf;", characters: "\u{29eb}" },
    CharRef { name: "par;", characters: "(" },
    CharRef { name: "scr;", characters: "\u{1d4c1}" },
    CharRef { name: "sim;", characters: "\u{2272}" },
    CharRef { name: "sqb;", characters: "[" },
    CharRef { name: "tcc;", characters: "\u{2aa6}" },
    CharRef { name: "tri;", characters: "\u{25c3}" },
    CharRef { name: "vnE;", characters: "\u{2268}\u{fe00}" },
    CharRef { name: "Eg;", characters: "\u{2a8b}" },
    CharRef { name: "ap;", characters: "\u{2a85}" },
    CharRef { name: "at;", characters: "\u{2aab}" },
    CharRef { name: "cy;", characters: "\u{43b}" },
    CharRef { name: "eg;", characters: "\u{22da}" },
    CharRef { name: "eq;", characters: "\u{2264}" },
    CharRef { name: "es;", characters: "\u{2a7d}" },
    CharRef { name: "fr;", characters: "\u{1d529}" },
    CharRef { name: "gE;", characters: "\u{2a91}" },
    CharRef { name: "nE;", characters: "\u{2268}" },
    CharRef { name: "ne;", characters: "\u{2a87}" },
    CharRef { name: "oz;", characters: "\u{25ca}" },
    CharRef { name: "rm;", characters: "\u{200e}" },
    CharRef { name: "sh;", characters: "\u{21b0}" },
    CharRef { name: "E;", characters: "\u{2266}" },
    CharRef { name: "e;", characters: "\u{2264}" },
    CharRef { name: "g;", characters: "\u{2276}" },
    CharRef { name: "l;", characters: "\u{226a}" },
    CharRef { name: "t;", characters: "<" },
    CharRef { name: "t", characters: "<" },
];

static LOWER_M: &[CharRef] = &[
    CharRef { name: "easuredangle;", characters: "\u{2221}" },
    CharRef { name: "apstodown;", characters: "\u{21a7}" },
    CharRef { name: "apstoleft;", characters: "\u{21a4}" },
    CharRef { name: "apstoup;", characters: "\u{21a5}" },
    CharRef { name: "ultimap;", characters: "\u{22b8}" },
    CharRef { name: "altese;", characters: "\u{2720}" },
    CharRef { name: "inusdu;", characters: "\u{2a2a}" },
    CharRef { name: "apsto;", characters: "\u{21a6}" },
    CharRef { name: "arker;", characters: "\u{25ae}" },
    CharRef { name: "comma;", characters: "\u{2a29}" },
    CharRef { name: "idast;", characters: "*" },
    CharRef { name: "idcir;", characters: "\u{2af0}" },
    CharRef { name: "iddot;", characters: "\u{b7}" },
    CharRef { name: "inusb;", characters: "\u{229f}" },
    CharRef { name: "inusd;", characters: "\u{2238}" },
    CharRef { name: "nplus;", characters: "\u{2213}" },
    CharRef { name: "odels;", characters: "\u{22a7}" },
    CharRef { name: "stpos;", characters: "\u{223e}" },
    CharRef { name: "DDot;", characters: "\u{223a}" },
    CharRef { name: "dash;", characters: "\u{2014}" },
    CharRef { name: "icro;", characters: "\u{b5}" },
    CharRef { name: "iddot", characters: "\u{b7}" },
    CharRef { name: "inus;", characters: "\u{2212}" },
    CharRef { name: "umap;", characters: "\u{22b8}" },
    CharRef { name: "acr;", characters: "\u{af}" },
    CharRef { name: "ale;", characters: "\u{2642}" },
    CharRef { name: "alt;", characters: "\u{2720}" },
    CharRef { name: "icro", characters: "\u{b5}" },
    CharRef { name: "lcp;", characters: "\u{2adb}" },
    CharRef { name: "ldr;", characters: "\u{2026}" },
    CharRef { name: "opf;", characters: "\u{1d55e}" },
    CharRef { name: "scr;", characters: "\u{1d4c2}" },
    CharRef { name: "acr", characters: "\u{af}" },
    CharRef { name: "ap;", characters: "\u{21a6}" },
    CharRef { name: "cy;", characters: "\u{43c}" },
    CharRef { name: "fr;", characters: "\u{1d52a}" },
    CharRef { name: "ho;", characters: "\u{2127}" },
    CharRef { name: "id;", characters: "\u{2223}" },
    CharRef { name: "p;", characters: "\u{2213}" },
    CharRef { name: "u;", characters: "\u{3bc}" },
];

static LOWER_N: &[CharRef] = &[
    CharRef { name: "trianglerighteq;", characters: "\u{22ed}" },
    CharRef { name: "Leftrightarrow;", characters: "\u{21ce}" },
    CharRef { name: "leftrightarrow;", characters: "\u{21ae}" },
    CharRef { name: "trianglelefteq;", characters: "\u{22ec}" },
    CharRef { name: "shortparallel;", characters: "\u{2226}" },
    CharRef { name: "triangleright;", characters: "\u{22eb}" },
    CharRef { name: "triangleleft;", characters: "\u{22ea}" },
    CharRef { name: "Rightarrow;", characters: "\u{21cf}" },
    CharRef { name: "rightarrow;", characters: "\u{219b}" },
    CharRef { name: "Leftarrow;", characters: "\u{21cd}" },
    CharRef { name: "leftarrow;", characters: "\u{219a}" },
    CharRef { name: "subseteqq;", characters: "\u{2ac5}\u{338}" },
    CharRef { name: "supseteqq;", characters: "\u{2ac6}\u{338}" },
    CharRef { name: "geqslant;", characters: "\u{2a7e}\u{338}" },
    CharRef { name: "leqslant;", characters: "\u{2a7d}\u{338}" },
    CharRef { name: "parallel;", characters: "\u{2226}" },
    CharRef { name: "shortmid;", characters: "\u{2224}" },
    CharRef { name: "subseteq;", characters: "\u{2288}" },
    CharRef { name: "supseteq;", characters: "\u{2289}" },
    CharRef { name: "aturals;", characters: "\u{2115}" },
    CharRef { name: "congdot;", characters: "\u{2a6d}\u{338}" },
    CharRef { name: "otindot;", characters: "\u{22f5}\u{338}" },
    CharRef { name: "approx;", characters: "\u{2249}" },
    CharRef { name: "atural;", characters: "\u{266e}" },
    CharRef { name: "earrow;", characters: "\u{2197}" },
    CharRef { name: "exists;", characters: "\u{2204}" },
    CharRef { name: "otinva;", characters: "\u{2209}" },
    CharRef { name: "otinvb;", characters: "\u{22f7}" },
    CharRef { name: "otinvc;", characters: "\u{22f6}" },
    CharRef { name: "otniva;", characters: "\u{220c}" },
    CharRef { name: "otnivb;", characters: "\u{22fe}" },
    CharRef { name: "otnivc;", characters: "\u{22fd}" },
    CharRef { name: "polint;", characters: "\u{2a14}" },
    CharRef { name: "preceq;", characters: "\u{2aaf}\u{338}" },
    CharRef { name: "sqsube;", characters: "\u{22e2}" },
    CharRef { name: "sqsupe;", characters: "\u{22e3}" },
    CharRef { name: "subset;", characters: "\u{2282}\u{20d2}" },
    CharRef { name: "succeq;", characters: "\u{2ab0}\u{338}" },
    CharRef { name: "supset;", characters: "\u{2283}\u{20d2}" },
    CharRef { name: "vinfin;", characters: "\u{29de}" },
    CharRef { name: "vltrie;", characters: "\u{22b4}\u{20d2}" },
    CharRef { name: "vrtrie;", characters: "\u{22b5}\u{20d2}" },
    CharRef { name: "warrow;", characters: "\u{2196}" },
    CharRef { name: "VDash;", characters: "\u{22af}" },
    CharRef { name: "Vdash;", characters: "\u{22ae}" },
    CharRef { name: "acute;", characters: "\u{144}" },
    CharRef { name: "bumpe;", characters: "\u{224f}\u{338}" },
    CharRef { name: "caron;", characters: "\u{148}" },
    CharRef { name: "cedil;", characters: "\u{146}" },
    CharRef { name: "earhk;", characters: "\u{2924}" },
    CharRef { name: "equiv;", characters: "\u{2262}" },
    CharRef { name: "esear;", characters: "\u{2928}" },
    CharRef { name: "exist;", characters: "\u{2204}" },
    CharRef { name: "ltrie;", characters: "\u{22ec}" },
    CharRef { name: "otinE;", characters: "\u{22f9}\u{338}" },
    CharRef { name: "parsl;", characters: "\u{2afd}\u{20e5}" },
    CharRef { name: "prcue;", characters: "\u{22e0}" },
    CharRef { name: "rarrc;", characters: "\u{2933}\u{338}" },
    CharRef { name: "rarrw;", characters: "\u{219d}\u{338}" },
    CharRef { name: "rtrie;", characters: "\u{22ed}" },
    CharRef { name: "sccue;", characters: "\u{22e1}" },
    CharRef { name: "simeq;", characters: "\u{2244}" },
    CharRef { name: "tilde;", characters: "\u{f1}" },
    CharRef { name: "umero;", characters: "\u{2116}" },
    CharRef { name: "vDash;", characters: "\u{22ad}" },
    CharRef { name: "vHarr;", characters: "\u{2904}" },
    CharRef { name: "vdash;", characters: "\u{22ac}" },
    CharRef { name: "vlArr;", characters: "\u{2902}" },
    CharRef { name: "vrArr;", characters: "\u{2903}" },
    CharRef { name: "warhk;", characters: "\u{2923}" },
    CharRef { name: "wnear;", characters: "\u{2927}" },
    CharRef { name: "abla;", characters: "\u{2207}" },
    CharRef { name: "apid;", characters: "\u{224b}\u{338}" },
    CharRef { name: "apos;", characters: "\u{149}" },
    CharRef { name: "atur;", characters: "\u{266e}" },
    CharRef { name: "bump;", characters: "\u{224e}\u{338}" },
    CharRef { name: "cong;", characters: "\u{2247}" },
    CharRef { name: "dash;", characters: "\u{2013}" },
    CharRef { name: "eArr;", characters: "\u{21d7}" },
    CharRef { name: "earr;", characters: "\u{2197}" },
    CharRef { name: "edot;", characters: "\u{2250}\u{338}" },
    CharRef { name: "esim;", characters: "\u{2242}\u{338}" },
    CharRef { name: "geqq;", characters: "\u{2267}\u{338}" },
    CharRef { name: "gsim;", characters: "\u{2275}" },
    CharRef { name: "hArr;", characters: "\u{21ce}" },
    CharRef { name: "harr;", characters: "\u{21ae}" },
    CharRef { name: "hpar;", characters: "\u{2af2}" },
    CharRef { name: "lArr;", characters: "\u{21cd}" },
    CharRef { name: "larr;", characters: "\u{219a}" },
    CharRef { name: "leqq;", characters: "\u{2266}\u{338}" },
    CharRef { name: "less;", characters: "\u{226e}" },
    CharRef { name: "lsim;", characters: "\u{2274}" },
    CharRef { name: "ltri;", characters: "\u{22ea}" },
    CharRef { name: "otin;", characters: "\u{2209}" },
    CharRef { name: "otni;", characters: "\u{220c}" },
    CharRef { name: "part;", characters: "\u{2202}\u{338}" },
    CharRef { name: "prec;", characters: "\u{2280}" },
    CharRef { name: "rArr;", characters: "\u{21cf}" },
    CharRef { name: "rarr;", characters: "\u{219b}" },
    CharRef { name: "rtri;", characters: "\u{22eb}" },
    CharRef { name: "sime;", characters: "\u{2244}" },
    CharRef { name: "smid;", characters: "\u{2224}" },
    CharRef { name: "spar;", characters: "\u{2226}" },
    CharRef { name: "subE;", characters: "\u{2ac5}\u{338}" },
    CharRef { name: "sube;", characters: "\u{2288}" },
    CharRef { name: "succ;", characters: "\u{2281}" },
    CharRef { name: "supE;", characters: "\u{2ac6}\u{338}" },
    CharRef { name: "supe;", characters: "\u{2289}" },
    CharRef { name: "tilde", characters: "\u{f1}" },
    CharRef { name: "umsp;", characters: "\u{2007}" },
    CharRef { name: "vsim;", characters: "\u{223c}\u{20d2}" },
    CharRef { name: "wArr;", characters: "\u{21d6}" },
    CharRef { name: "warr;", characters: "\u{2196}" },
    CharRef { name: "Gtv;", characters: "\u{226b}\u{338}" },
    CharRef { name: "Ltv;", characters: "\u{226a}\u{338}" },
    CharRef { name: "ang;", characters: "\u{2220}\u{20d2}" },
    CharRef { name: "apE;", characters: "\u{2a70}\u{338}" },
    CharRef { name: "bsp;", characters: "\u{a0}" },
    CharRef { name: "cap;", characters: "\u{2a43}" },
    CharRef { name: "cup;", characters: "\u{2a42}" },
    CharRef { name: "geq;", characters: "\u{2271}" },
    CharRef { name: "ges;", characters: "\u{2a7e}\u{338}" },
    CharRef { name: "gtr;", characters: "\u{226f}" },
    CharRef { name: "isd;", characters: "\u{22fa}" },
    CharRef { name: "jcy;", characters: "\u{45a}" },
    CharRef { name: "ldr;", characters: "\u{2025}" },
    CharRef { name: "leq;", characters: "\u{2270}" },
    CharRef { name: "les;", characters: "\u{2a7d}\u{338}" },
    CharRef { name: "mid;", characters: "\u{2224}" },
    CharRef { name: "opf;", characters: "\u{1d55f}" },
    CharRef { name: "par;", characters: "\u{2226}" },
    CharRef { name: "pre;", characters: "\u{2aaf}\u{338}" },
    CharRef { name: "sce;", characters: "\u{2ab0}\u{338}" },
    CharRef { name: "scr;", characters: "\u{1d4c3}" },
    CharRef { name: "sim;", characters: "\u{2241}" },
    CharRef { name: "sub;", characters: "\u{2284}" },
    CharRef { name: "sup;", characters: "\u{2285}" },
    CharRef { name: "tgl;", characters: "\u{2279}" },
    CharRef { name: "tlg;", characters: "\u{2278}" },
    CharRef { name: "vap;", characters: "\u{224d}\u{20d2}" },
    CharRef { name: "vge;", characters: "\u{2265}\u{20d2}" },
    CharRef { name: "vgt;", characters: ">\u{20d2}" },
    CharRef { name: "vle;", characters: "\u{2264}\u{20d2}" },
    CharRef { name: "vlt;", characters: "<\u{20d2}" },
    CharRef { name: "Gg;", characters: "\u{22d9}\u{338}" },
    CharRef { name: "Gt;", characters: "\u{226b}\u{20d2}" },
    CharRef { name: "Ll;", characters: "\u{22d8}\u{338}" },
    CharRef { name: "Lt;", characters: "\u{226a}\u{20d2}" },
    CharRef { name: "ap;", characters: "\u{2249}" },
    CharRef { name: "bsp", characters: "\u{a0}" },
    CharRef { name: "cy;", characters: "\u{43d}" },
    CharRef { name: "fr;", characters: "\u{1d52b}" },
    CharRef { name: "gE;", characters: "\u{2267}\u{338}" },
    CharRef { name: "ge;", characters: "\u{2271}" },
    CharRef { name: "gt;", characters: "\u{226f}" },
    CharRef { name: "is;", characters: "\u{22fc}" },
    CharRef { name: "iv;", characters: "\u{220b}" },
    CharRef { name: "lE;", characters: "\u{2266}\u{338}" },
    CharRef { name: "le;", characters: "\u{2270}" },
    CharRef { name: "lt;", characters: "\u{226e}" },
    CharRef { name: "ot;", characters: "\u{ac}" },
    CharRef { name: "pr;", characters: "\u{2280}" },
    CharRef { name: "sc;", characters: "\u{2281}" },
    CharRef { name: "um;", characters: "#" },
    CharRef { name: "e;", characters: "\u{2260}" },
    CharRef { name: "i;", characters: "\u{220b}" },
    CharRef { name: "ot", characters: "\u{ac}" },
    CharRef { name: "u;", characters: "\u{3bd}" },
];

static LOWER_O: &[CharRef] = &[
    CharRef { name: "timesas;", characters: "\u{2a36}" },
    CharRef { name: "lcross;", characters: "\u{29bb}" },
    CharRef { name: "micron;", characters: "\u{3bf}" },
    CharRef { name: "rderof;", characters: "\u{2134}" },
    CharRef { name: "rslope;", characters: "\u{2a57}" },
    CharRef { name: "acute;", characters: "\u{f3}" },
    CharRef { name: "dblac;", characters: "\u{151}" },
    CharRef { name: "dsold;", characters: "\u{29bc}" },
    CharRef { name: "grave;", characters: "\u{f2}" },
    CharRef { name: "minus;", characters: "\u{2296}" },
    CharRef { name: "rigof;", characters: "\u{22b6}" },
    CharRef { name: "slash;", characters: "\u{f8}" },
    CharRef { name: "tilde;", characters: "\u{f5}" },
    CharRef { name: "times;", characters: "\u{2297}" },
    CharRef { name: "acute", characters: "\u{f3}" },
    CharRef { name: "circ;", characters: "\u{f4}" },
    CharRef { name: "dash;", characters: "\u{229d}" },
    CharRef { name: "elig;", characters: "\u{153}" },
    CharRef { name: "fcir;", characters: "\u{29bf}" },
    CharRef { name: "grave", characters: "\u{f2}" },
    CharRef { name: "hbar;", characters: "\u{29b5}" },
    CharRef { name: "larr;", characters: "\u{21ba}" },
    CharRef { name: "lcir;", characters: "\u{29be}" },
    CharRef { name: "line;", characters: "\u{203e}" },
    CharRef { name: "macr;", characters: "\u{14d}" },
    CharRef { name: "mega;", characters: "\u{3c9}" },
    CharRef { name: "perp;", characters: "\u{29b9}" },
    CharRef { name: "plus;", characters: "\u{2295}" },
    CharRef { name: "rarr;", characters: "\u{21bb}" },
    CharRef { name: "rder;", characters: "\u{2134}" },
    CharRef { name: "slash", characters: "\u{f8}" },
    CharRef { name: "tilde", characters: "\u{f5}" },
    CharRef { name: "vbar;", characters: "\u{233d}" },
    CharRef { name: "ast;", characters: "\u{229b}" },
    CharRef { name: "cir;", characters: "\u{229a}" },
    CharRef { name: "circ", characters: "\u{f4}" },
    CharRef { name: "div;", characters: "\u{2a38}" },
    CharRef { name: "dot;", characters: "\u{2299}" },
    CharRef { name: "gon;", characters: "\u{2db}" },
    CharRef { name: "int;", characters: "\u{222e}" },
    CharRef { name: "mid;", characters: "\u{29b6}" },
    CharRef { name: "opf;", characters: "\u{1d560}" },
    CharRef { name: "par;", characters: "\u{29b7}" },
    CharRef { name: "rdf;", characters: "\u{aa}" },
    CharRef { name: "rdm;", characters: "\u{ba}" },
    CharRef { name: "ror;", characters: "\u{2a56}" },
    CharRef { name: "scr;", characters: "\u{2134}" },
    CharRef { name: "sol;", characters: "\u{2298}" },
    CharRef { name: "uml;", characters: "\u{f6}" },
    CharRef { name: "cy;", characters: "\u{43e}" },
    CharRef { name: "fr;", characters: "\u{1d52c}" },
    CharRef { name: "gt;", characters: "\u{29c1}" },
    CharRef { name: "hm;", characters: "\u{3a9}" },
    CharRef { name: "lt;", characters: "\u{29c0}" },
    CharRef { name: "rd;", characters: "\u{2a5d}" },
    CharRef { name: "rdf", characters: "\u{aa}" },
    CharRef { name: "rdm", characters: "\u{ba}" },
    CharRef { name: "rv;", characters: "\u{2a5b}" },
    CharRef { name: "uml", characters: "\u{f6}" },
    CharRef { name: "S;", characters: "\u{24c8}" },
    CharRef { name: "r;", characters: "\u{2228}" },
];

static LOWER_P: &[CharRef] = &[
    CharRef { name: "reccurlyeq;", characters: "\u{227c}" },
    CharRef { name: "recnapprox;", characters: "\u{2ab9}" },
    CharRef { name: "recapprox;", characters: "\u{2ab7}" },
    CharRef { name: "itchfork;", characters: "\u{22d4}" },
    CharRef { name: "arallel;", characters: "\u{2225}" },
    CharRef { name: "lusacir;", characters: "\u{2a23}" },
    CharRef { name: "ointint;", characters: "\u{2a15}" },
    CharRef { name: "recneqq;", characters: "\u{2ab5}" },
    CharRef { name: "recnsim;", characters: "\u{22e8}" },
    CharRef { name: "rofalar;", characters: "\u{232e}" },
    CharRef { name: "rofline;", characters: "\u{2312}" },
    CharRef { name: "rofsurf;", characters: "\u{2313}" },
    CharRef { name: "ertenk;", characters: "\u{2031}" },
    CharRef { name: "lanckh;", characters: "\u{210e}" },
    CharRef { name: "luscir;", characters: "\u{2a22}" },
    CharRef { name: "lussim;", characters: "\u{2a26}" },
    CharRef { name: "lustwo;", characters: "\u{2a27}" },
    CharRef { name: "recsim;", characters: "\u{227e}" },
    CharRef { name: "arsim;", characters: "\u{2af3}" },
    CharRef { name: "ercnt;", characters: "%" },
    CharRef { name: "eriod;", characters: "." },
    CharRef { name: "ermil;", characters: "\u{2030}" },
    CharRef { name: "hmmat;", characters: "\u{2133}" },
    CharRef { name: "lanck;", characters: "\u{210f}" },
    CharRef { name: "lankv;", characters: "\u{210f}" },
    CharRef { name: "lusdo;", characters: "\u{2214}" },
    CharRef { name: "lusdu;", characters: "\u{2a25}" },
    CharRef { name: "lusmn;", characters: "\u{b1}" },
    CharRef { name: "receq;", characters: "\u{2aaf}" },
    CharRef { name: "rimes;", characters: "\u{2119}" },
    CharRef { name: "rnsim;", characters: "\u{22e8}" },
    CharRef { name: "ropto;", characters: "\u{221d}" },
    CharRef { name: "rurel;", characters: "\u{22b0}" },
    CharRef { name: "uncsp;", characters: "\u{2008}" },
    CharRef { name: "arsl;", characters: "\u{2afd}" },
    CharRef { name: "hone;", characters: "\u{260e}" },
    CharRef { name: "lusb;", characters: "\u{229e}" },
    CharRef { name: "luse;", characters: "\u{2a72}" },
    CharRef { name: "lusmn", characters: "\u{b1}" },
    CharRef { name: "ound;", characters: "\u{a3}" },
    CharRef { name: "rcue;", characters: "\u{227c}" },
    CharRef { name: "rime;", characters: "\u{2032}" },
    CharRef { name: "rnap;", characters: "\u{2ab9}" },
    CharRef { name: "rsim;", characters: "\u{227e}" },
    CharRef { name: "ara;", characters: "\u{b6}" },
    CharRef { name: "art;", characters: "\u{2202}" },
    CharRef { name: "erp;", characters: "\u{22a5}" },
    CharRef { name: "hiv;", characters: "\u{3d5}" },
    CharRef { name: "lus;", characters: "+" },
    CharRef { name: "opf;", characters: "\u{1d561}" },
    CharRef { name: "ound", characters: "\u{a3}" },
    CharRef { name: "rap;", characters: "\u{2ab7}" },
    CharRef { name: "rec;", characters: "\u{227a}" },
    CharRef { name: "rnE;", characters: "\u{2ab5}" },
    CharRef { name: "rod;", characters: "\u{220f}" },
    CharRef { name: "rop;", characters: "\u{221d}" },
    CharRef { name: "scr;", characters: "\u{1d4c5}" },
    CharRef { name: "ar;", characters: "\u{2225}" },
    CharRef { name: "ara", characters: "\u{b6}" },
    CharRef { name: "cy;", characters: "\u{43f}" },
    CharRef { name: "fr;", characters: "\u{1d52d}" },
    CharRef { name: "hi;", characters: "\u{3c6}" },
    CharRef { name: "iv;", characters: "\u{3d6}" },
    CharRef { name: "rE;", characters: "\u{2ab3}" },
    CharRef { name: "re;", characters: "\u{2aaf}" },
    CharRef { name: "si;", characters: "\u{3c8}" },
    CharRef { name: "i;", characters: "\u{3c0}" },
    CharRef { name: "m;", characters: "\u{b1}" },
    CharRef { name: "r;", characters: "\u{227a}" },
];

static LOWER_Q: &[CharRef] = &[
    CharRef { name: "uaternions;", characters: "\u{210d}" },
    CharRef { name: "uatint;", characters: "\u{2a16}" },
    CharRef { name: "uesteq;", characters: "\u{225f}" },
    CharRef { name: "prime;", characters: "\u{2057}" },
    CharRef { name: "uest;", characters: "?" },
    CharRef { name: "int;", characters: "\u{2a0c}" },
    CharRef { name: "opf;", characters: "\u{1d562}" },
    CharRef { name: "scr;", characters: "\u{1d4c6}" },
    CharRef { name: "uot;", characters: "\"" },
    CharRef { name: "fr;", characters: "\u{1d52e}" },
    CharRef { name: "uot", characters: "\"" },
];

static LOWER_R: &[CharRef] = &[
    CharRef { name: "ightleftharpoons;", characters: "\u{21cc}" },
    CharRef { name: "ightharpoondown;", characters: "\u{21c1}" },
    CharRef { name: "ightrightarrows;", characters: "\u{21c9}" },
    CharRef { name: "ightleftarrows;", characters: "\u{21c4}" },
    CharRef { name: "ightsquigarrow;", characters: "\u{219d}" },
    CharRef { name: "ightthreetimes;", characters: "\u{22cc}" },
    CharRef { name: "ightarrowtail;", characters: "\u{21a3}" },
    CharRef { name: "ightharpoonup;", characters: "\u{21c0}" },
    CharRef { name: "isingdotseq;", characters: "\u{2253}" },
    CharRef { name: "ightarrow;", characters: "\u{2192}" },
    CharRef { name: "moustache;", characters: "\u{23b1}" },
    CharRef { name: "ationals;", characters: "\u{211a}" },
    CharRef { name: "aemptyv;", characters: "\u{29b3}" },
    CharRef { name: "ealpart;", characters: "\u{211c}" },
    CharRef { name: "ppolint;", characters: "\u{2a12}" },
    CharRef { name: "triltri;", characters: "\u{29ce}" },
    CharRef { name: "arrbfs;", characters: "\u{2920}" },
    CharRef { name: "arrsim;", characters: "\u{2974}" },
    CharRef { name: "brksld;", characters: "\u{298e}" },
    CharRef { name: "brkslu;", characters: "\u{2990}" },
    CharRef { name: "dldhar;", characters: "\u{2969}" },
    CharRef { name: "ealine;", characters: "\u{211b}" },
    CharRef { name: "otimes;", characters: "\u{2a35}" },
    CharRef { name: "uluhar;", characters: "\u{2968}" },
    CharRef { name: "Atail;", characters: "\u{291c}" },
    CharRef { name: "acute;", characters: "\u{155}" },
    CharRef { name: "angle;", characters: "\u{27e9}" },
    CharRef { name: "arrap;", characters: "\u{2975}" },
    CharRef { name: "arrfs;", characters: "\u{291e}" },
    CharRef { name: "arrhk;", characters: "\u{21aa}" },
    CharRef { name: "arrlp;", characters: "\u{21ac}" },
    CharRef { name: "arrpl;", characters: "\u{2945}" },
    CharRef { name: "arrtl;", characters: "\u{21a3}" },
    CharRef { name: "atail;", characters: "\u{291a}" },
    CharRef { name: "brace;", characters: "}" },
    CharRef { name: "brack;", characters: "]" },
    CharRef { name: "caron;", characters: "\u{159}" },
    CharRef { name: "cedil;", characters: "\u{157}" },
    CharRef { name: "dquor;", characters: "\u{201d}" },
    CharRef { name: "fisht;", characters: "\u{297d}" },
    CharRef { name: "floor;", characters: "\u{230b}" },
    CharRef { name: "harul;", characters: "\u{296c}" },
    CharRef { name: "moust;", characters: "\u{23b1}" },
    CharRef { name: "oplus;", characters: "\u{2a2e}" },
    CharRef { name: "pargt;", characters: "\u{2994}" },
    CharRef { name: "saquo;", characters: "\u{203a}" },
    CharRef { name: "squor;", characters: "\u{2019}" },
    CharRef { name: "three;", characters: "\u{22cc}" },
    CharRef { name: "times;", characters: "\u{22ca}" },
    CharRef { name: "Aarr;", characters: "\u{21db}" },
    CharRef { name: "Barr;", characters: "\u{290f}" },
    CharRef { name: "adic;", characters: "\u{221a}" },
    CharRef { name: "angd;", characters: "\u{2992}" },
    CharRef { name: "ange;", characters: "\u{29a5}" },
    CharRef { name: "aquo;", characters: "\u{bb}" },
    CharRef { name: "arrb;", characters: "\u{21e5}" },
    CharRef { name: "arrc;", characters: "\u{2933}" },
    CharRef { name: "arrw;", characters: "\u{219d}" },
    CharRef { name: "atio;", characters: "\u{2236}" },
    CharRef { name: "barr;", characters: "\u{290d}" },
    CharRef { name: "bbrk;", characters: "\u{2773}" },
    CharRef { name: "brke;", characters: "\u{298c}" },
    CharRef { name: "ceil;", characters: "\u{2309}" },
    CharRef { name: "dquo;", characters: "\u{201d}" },
    CharRef { name: "eals;", characters: "\u{211d}" },
    CharRef { name: "hard;", characters: "\u{21c1}" },
    CharRef { name: "haru;", characters: "\u{21c0}" },
    CharRef { name: "larr;", characters: "\u{21c4}" },
    CharRef { name: "lhar;", characters: "\u{21cc}" },
    CharRef { name: "nmid;", characters: "\u{2aee}" },
    CharRef { name: "oang;", characters: "\u{27ed}" },
    CharRef { name: "oarr;", characters: "\u{21fe}" },
    CharRef { name: "obrk;", characters: "\u{27e7}" },
    CharRef { name: "opar;", characters: "\u{2986}" },
    CharRef { name: "rarr;", characters: "\u{21c9}" },
    CharRef { name: "squo;", characters: "\u{2019}" },
    CharRef { name: "trie;", characters: "\u{22b5}" },
    CharRef { name: "trif;", characters: "\u{25b8}" },
    CharRef { name: "Arr;", characters: "\u{21d2}" },
    CharRef { name: "Har;", characters: "\u{2964}" },
    CharRef { name: "ace;", characters: "\u{223d}\u{331}" },
    CharRef { name: "ang;", characters: "\u{27e9}" },
    CharRef { name: "aquo", characters: "\u{bb}" },
    CharRef { name: "arr;", characters: "\u{2192}" },
    CharRef { name: "cub;", characters: "}" },
    CharRef { name: "dca;", characters: "\u{2937}" },
    CharRef { name: "dsh;", characters: "\u{21b3}" },
    CharRef { name: "eal;", characters: "\u{211c}" },
    CharRef { name: "ect;", characters: "\u{25ad}" },
    CharRef { name: "hov;", characters: "\u{3f1}" },
    CharRef { name: "ing;", characters: "\u{2da}" },
    CharRef { name: "opf;", characters: "\u{1d563}" },
    CharRef { name: "par;", characters: ")" },
    CharRef { name: "scr;", characters: "\u{1d4c7}" },
    CharRef { name: "sqb;", characters: "]" },
    CharRef { name: "tri;", characters: "\u{25b9}" },
    CharRef { name: "cy;", characters: "\u{440}" },
    CharRef { name: "eg;", characters: "\u{ae}" },
    CharRef { name: "fr;", characters: "\u{1d52f}" },
    CharRef { name: "ho;", characters: "\u{3c1}" },
    CharRef { name: "lm;", characters: "\u{200f}" },
    CharRef { name: "sh;", characters: "\u{21b1}" },
    CharRef { name: "eg", characters: "\u{ae}" },
    CharRef { name: "x;", characters: "\u{211e}" },
];

static LOWER_S: &[CharRef] = &[
    CharRef { name: "traightepsilon;", characters: "\u{3f5}" },
    CharRef { name: "hortparallel;", characters: "\u{2225}" },
    CharRef { name: "mallsetminus;", characters: "\u{2216}" },
    CharRef { name: "traightphi;", characters: "\u{3d5}" },
    CharRef { name: "ucccurlyeq;", characters: "\u{227d}" },
    CharRef { name: "uccnapprox;", characters: "\u{2aba}" },
    CharRef { name: "qsubseteq;", characters: "\u{2291}" },
    CharRef { name: "qsupseteq;", characters: "\u{2292}" },
    CharRef { name: "ubsetneqq;", characters: "\u{2acb}" },
    CharRef { name: "uccapprox;", characters: "\u{2ab8}" },
    CharRef { name: "upsetneqq;", characters: "\u{2acc}" },
    CharRef { name: "padesuit;", characters: "\u{2660}" },
    CharRef { name: "ubseteqq;", characters: "\u{2ac5}" },
    CharRef { name: "ubsetneq;", characters: "\u{228a}" },
    CharRef { name: "upseteqq;", characters: "\u{2ac6}" },
    CharRef { name: "upsetneq;", characters: "\u{228b}" },
    CharRef { name: "cpolint;", characters: "\u{2a13}" },
    CharRef { name: "etminus;", characters: "\u{2216}" },
    CharRef { name: "hortmid;", characters: "\u{2223}" },
    CharRef { name: "meparsl;", characters: "\u{29e4}" },
    CharRef { name: "qsubset;", characters: "\u{228f}" },
    CharRef { name: "qsupset;", characters: "\u{2290}" },
    CharRef { name: "ubseteq;", characters: "\u{2286}" },
    CharRef { name: "uccneqq;", characters: "\u{2ab6}" },
    CharRef { name: "uccnsim;", characters: "\u{22e9}" },
    CharRef { name: "upseteq;", characters: "\u{2287}" },
    CharRef { name: "earrow;", characters: "\u{2198}" },
    CharRef { name: "implus;", characters: "\u{2a24}" },
    CharRef { name: "imrarr;", characters: "\u{2972}" },
    CharRef { name: "ubedot;", characters: "\u{2ac3}" },
    CharRef { name: "ubmult;", characters: "\u{2ac1}" },
    CharRef { name: "ubplus;", characters: "\u{2abf}" },
    CharRef { name: "ubrarr;", characters: "\u{2979}" },
    CharRef { name: "uccsim;", characters: "\u{227f}" },
    CharRef { name: "updsub;", characters: "\u{2ad8}" },
    CharRef { name: "upedot;", characters: "\u{2ac4}" },
    CharRef { name: "uphsol;", characters: "\u{27c9}" },
    CharRef { name: "uphsub;", characters: "\u{2ad7}" },
    CharRef { name: "uplarr;", characters: "\u{297b}" },
    CharRef { name: "upmult;", characters: "\u{2ac2}" },
    CharRef { name: "upplus;", characters: "\u{2ac0}" },
    CharRef { name: "warrow;", characters: "\u{2199}" },
    CharRef { name: "acute;", characters: "\u{15b}" },
    CharRef { name: "caron;", characters: "\u{161}" },
    CharRef { name: "cedil;", characters: "\u{15f}" },
    CharRef { name: "cnsim;", characters: "\u{22e9}" },
    CharRef { name: "earhk;", characters: "\u{2925}" },
    CharRef { name: "eswar;", characters: "\u{2929}" },
    CharRef { name: "frown;", characters: "\u{2322}" },
    CharRef { name: "hchcy;", characters: "\u{449}" },
    CharRef { name: "igmaf;", characters: "\u{3c2}" },
    CharRef { name: "igmav;", characters: "\u{3c2}" },
    CharRef { name: "imdot;", characters: "\u{2a6a}" },
    CharRef { name: "mashp;", characters: "\u{2a33}" },
    CharRef { name: "oftcy;", characters: "\u{44c}" },
    CharRef { name: "olbar;", characters: "\u{233f}" },
    CharRef { name: "pades;", characters: "\u{2660}" },
    CharRef { name: "qcaps;", characters: "\u{2293}\u{fe00}" },
    CharRef { name: "qcups;", characters: "\u{2294}\u{fe00}" },
    CharRef { name: "qsube;", characters: "\u{2291}" },
    CharRef { name: "qsupe;", characters: "\u{2292}" },
    CharRef { name: "quare;", characters: "\u{25a1}" },
    CharRef { name: "quarf;", characters: "\u{25aa}" },
    CharRef { name: "setmn;", characters: "\u{2216}" },
    CharRef { name: "smile;", characters: "\u{2323}" },
    CharRef { name: "starf;", characters: "\u{22c6}" },
    CharRef { name: "ubdot;", characters: "\u{2abd}" },
    CharRef { name: "ubset;", characters: "\u{2282}" },
    CharRef { name: "ubsim;", characters: "\u{2ac7}" },
    CharRef { name: "ubsub;", characters: "\u{2ad5}" },
    CharRef { name: "ubsup;", characters: "\u{2ad3}" },
    CharRef { name: "ucceq;", characters: "\u{2ab0}" },
    CharRef { name: "updot;", characters: "\u{2abe}" },
    CharRef { name: "upset;", characters: "\u{2283}" },
    CharRef { name: "upsim;", characters: "\u{2ac8}" },
    CharRef { name: "upsub;", characters: "\u{2ad4}" },
    CharRef { name: "upsup;", characters: "\u{2ad6}" },
    CharRef { name: "warhk;", characters: "\u{2926}" },
    CharRef { name: "wnwar;", characters: "\u{292a}" },
    CharRef { name: "bquo;", characters: "\u{201a}" },
    CharRef { name: "ccue;", characters: "\u{227d}" },
    CharRef { name: "circ;", characters: "\u{15d}" },
    CharRef { name: "cnap;", characters: "\u{2aba}" },
    CharRef { name: "csim;", characters: "\u{227f}" },
    CharRef { name: "dotb;", characters: "\u{22a1}" },
    CharRef { name: "dote;", characters: "\u{2a66}" },
    CharRef { name: "eArr;", characters: "\u{21d8}" },
    CharRef { name: "earr;", characters: "\u{2198}" },
    CharRef { name: "etmn;", characters: "\u{2216}" },
    CharRef { name: "harp;", characters: "\u{266f}" },
    CharRef { name: "igma;", characters: "\u{3c3}" },
    CharRef { name: "imeq;", characters: "\u{2243}" },
    CharRef { name: "imgE;", characters: "\u{2aa0}" },
    CharRef { name: "imlE;", characters: "\u{2a9f}" },
    CharRef { name: "imne;", characters: "\u{2246}" },
    CharRef { name: "larr;", characters: "\u{2190}" },
    CharRef { name: "mile;", characters: "\u{2323}" },
    CharRef { name: "mtes;", characters: "\u{2aac}\u{fe00}" },
    CharRef { name: "qcap;", characters: "\u{2293}" },
    CharRef { name: "qcup;", characters: "\u{2294}" },
    CharRef { name: "qsub;", characters: "\u{228f}" },
    CharRef { name: "qsup;", characters: "\u{2290}" },
    CharRef { name: "rarr;", characters: "\u{2192}" },
    CharRef { name: "tarf;", characters: "\u{2605}" },
    CharRef { name: "trns;", characters: "\u{af}" },
    CharRef { name: "ubnE;", characters: "\u{2acb}" },
    CharRef { name: "ubne;", characters: "\u{228a}" },
    CharRef { name: "upnE;", characters: "\u{2acc}" },
    CharRef { name: "upne;", characters: "\u{228b}" },
    CharRef { name: "wArr;", characters: "\u{21d9}" },
    CharRef { name: "warr;", characters: "\u{2199}" },
    CharRef { name: "zlig;", characters: "\u{df}" },
    CharRef { name: "cap;", characters: "\u{2ab8}" },
    CharRef { name: "cnE;", characters: "\u{2ab6}" },
    CharRef { name: "dot;", characters: "\u{22c5}" },
    CharRef { name: "ect;", characters: "\u{a7}" },
    CharRef { name: "emi;", characters: ";" },
    CharRef { name: "ext;", characters: "\u{2736}" },
    CharRef { name: "hcy;", characters: "\u{448}" },
    CharRef { name: "ime;", characters: "\u{2243}" },
    CharRef { name: "img;", characters: "\u{2a9e}" },
    CharRef { name: "iml;", characters: "\u{2a9d}" },
    CharRef { name: "mid;", characters: "\u{2223}" },
    CharRef { name: "mte;", characters: "\u{2aac}" },
    CharRef { name: "olb;", characters: "\u{29c4}" },
    CharRef { name: "opf;", characters: "\u{1d564}" },
    CharRef { name: "par;", characters: "\u{2225}" },
    CharRef { name: "quf;", characters: "\u{25aa}" },
    CharRef { name: "scr;", characters: "\u{1d4c8}" },
    CharRef { name: "tar;", characters: "\u{2606}" },
    CharRef { name: "ubE;", characters: "\u{2ac5}" },
    CharRef { name: "ube;", characters: "\u{2286}" },
    CharRef { name: "ucc;", characters: "\u{227b}" },
    CharRef { name: "ung;", characters: "\u{266a}" },
    CharRef { name: "up1;", characters: "\u{b9}" },
    CharRef { name: "up2;", characters: "\u{b2}" },
    CharRef { name: "up3;", characters: "\u{b3}" },
    CharRef { name: "upE;", characters: "\u{2ac6}" },
    CharRef { name: "upe;", characters: "\u{2287}" },
    CharRef { name: "zlig", characters: "\u{df}" },
    CharRef { name: "cE;", characters: "\u{2ab4}" },
    CharRef { name: "ce;", characters: "\u{2ab0}" },
    CharRef { name: "cy;", characters: "\u{441}" },
    CharRef { name: "ect", characters: "\u{a7}" },
    CharRef { name: "fr;", characters: "\u{1d530}" },
    CharRef { name: "hy;", characters: "\u{ad}" },
    CharRef { name: "im;", characters: "\u{223c}" },
    CharRef { name: "mt;", characters: "\u{2aaa}" },
    CharRef { name: "ol;", characters: "/" },
    CharRef { name: "qu;", characters: "\u{25a1}" },
    CharRef { name: "ub;", characters: "\u{2282}" },
    CharRef { name: "um;", characters: "\u{2211}" },
    CharRef { name: "up1", characters: "\u{b9}" },
    CharRef { name: "up2", characters: "\u{b2}" },
    CharRef { name: "up3", characters: "\u{b3}" },
    CharRef { name: "up;", characters: "\u{2283}" },
    CharRef { name: "c;", characters: "\u{227b}" },
    CharRef { name: "hy", characters: "\u{ad}" },
];

static LOWER_T: &[CharRef] = &[
    CharRef { name: "woheadrightarrow;", characters: "\u{21a0}" },
    CharRef { name: "woheadleftarrow;", characters: "\u{219e}" },
    CharRef { name: "rianglerighteq;", characters: "\u{22b5}" },
    CharRef { name: "rianglelefteq;", characters: "\u{22b4}" },
    CharRef { name: "riangleright;", characters: "\u{25b9}" },
    CharRef { name: "riangledown;", characters: "\u{25bf}" },
    CharRef { name: "riangleleft;", characters: "\u{25c3}" },
    CharRef { name: "hickapprox;", characters: "\u{2248}" },
    CharRef { name: "herefore;", characters: "\u{2234}" },
    CharRef { name: "riangleq;", characters: "\u{225c}" },
    CharRef { name: "hetasym;", characters: "\u{3d1}" },
    CharRef { name: "hicksim;", characters: "\u{223c}" },
    CharRef { name: "imesbar;", characters: "\u{2a31}" },
    CharRef { name: "riangle;", characters: "\u{25b5}" },
    CharRef { name: "riminus;", characters: "\u{2a3a}" },
    CharRef { name: "rpezium;", characters: "\u{23e2}" },
    CharRef { name: "opfork;", characters: "\u{2ada}" },
    CharRef { name: "riplus;", characters: "\u{2a39}" },
    CharRef { name: "ritime;", characters: "\u{2a3b}" },
    CharRef { name: "arget;", characters: "\u{2316}" },
    CharRef { name: "caron;", characters: "\u{165}" },
    CharRef { name: "cedil;", characters: "\u{163}" },
    CharRef { name: "elrec;", characters: "\u{2315}" },
    CharRef { name: "here4;", characters: "\u{2234}" },
    CharRef { name: "hetav;", characters: "\u{3d1}" },
    CharRef { name: "hinsp;", characters: "\u{2009}" },
    CharRef { name: "hksim;", characters: "\u{223c}" },
    CharRef { name: "imesb;", characters: "\u{22a0}" },
    CharRef { name: "imesd;", characters: "\u{2a30}" },
    CharRef { name: "opbot;", characters: "\u{2336}" },
    CharRef { name: "opcir;", characters: "\u{2af1}" },
    CharRef { name: "prime;", characters: "\u{2034}" },
    CharRef { name: "ridot;", characters: "\u{25ec}" },
    CharRef { name: "strok;", characters: "\u{167}" },
    CharRef { name: "heta;", characters: "\u{3b8}" },
    CharRef { name: "hkap;", characters: "\u{2248}" },
    CharRef { name: "horn;", characters: "\u{fe}" },
    CharRef { name: "ilde;", characters: "\u{2dc}" },
    CharRef { name: "imes;", characters: "\u{d7}" },
    CharRef { name: "rade;", characters: "\u{2122}" },
    CharRef { name: "risb;", characters: "\u{29cd}" },
    CharRef { name: "shcy;", characters: "\u{45b}" },
    CharRef { name: "wixt;", characters: "\u{226c}" },
    CharRef { name: "brk;", characters: "\u{23b4}" },
    CharRef { name: "dot;", characters: "\u{20db}" },
    CharRef { name: "horn", characters: "\u{fe}" },
    CharRef { name: "imes", characters: "\u{d7}" },
    CharRef { name: "int;", characters: "\u{222d}" },
    CharRef { name: "oea;", characters: "\u{2928}" },
    CharRef { name: "opf;", characters: "\u{1d565}" },
    CharRef { name: "osa;", characters: "\u{2929}" },
    CharRef { name: "rie;", characters: "\u{225c}" },
    CharRef { name: "scr;", characters: "\u{1d4c9}" },
    CharRef { name: "scy;", characters: "\u{446}" },
    CharRef { name: "au;", characters: "\u{3c4}" },
    CharRef { name: "cy;", characters: "\u{442}" },
    CharRef { name: "fr;", characters: "\u{1d531}" },
    CharRef { name: "op;", characters: "\u{22a4}" },
];

static LOWER_U: &[CharRef] = &[
    CharRef { name: "pharpoonright;", characters: "\u{21be}" },
    CharRef { name: "pharpoonleft;", characters: "\u{21bf}" },
    CharRef { name: "pdownarrow;", characters: "\u{2195}" },
    CharRef { name: "puparrows;", characters: "\u{21c8}" },
    CharRef { name: "lcorner;", characters: "\u{231c}" },
    CharRef { name: "rcorner;", characters: "\u{231d}" },
    CharRef { name: "parrow;", characters: "\u{2191}" },
    CharRef { name: "psilon;", characters: "\u{3c5}" },
    CharRef { name: "wangle;", characters: "\u{29a7}" },
    CharRef { name: "acute;", characters: "\u{fa}" },
    CharRef { name: "breve;", characters: "\u{16d}" },
    CharRef { name: "dblac;", characters: "\u{171}" },
    CharRef { name: "fisht;", characters: "\u{297e}" },
    CharRef { name: "grave;", characters: "\u{f9}" },
    CharRef { name: "lcorn;", characters: "\u{231c}" },
    CharRef { name: "lcrop;", characters: "\u{230f}" },
    CharRef { name: "rcorn;", characters: "\u{231d}" },
    CharRef { name: "rcrop;", characters: "\u{230e}" },
    CharRef { name: "tilde;", characters: "\u{169}" },
    CharRef { name: "acute", characters: "\u{fa}" },
    CharRef { name: "brcy;", characters: "\u{45e}" },
    CharRef { name: "circ;", characters: "\u{fb}" },
    CharRef { name: "darr;", characters: "\u{21c5}" },
    CharRef { name: "dhar;", characters: "\u{296e}" },
    CharRef { name: "grave", characters: "\u{f9}" },
    CharRef { name: "harl;", characters: "\u{21bf}" },
    CharRef { name: "harr;", characters: "\u{21be}" },
    CharRef { name: "hblk;", characters: "\u{2580}" },
    CharRef { name: "ltri;", characters: "\u{25f8}" },
    CharRef { name: "macr;", characters: "\u{16b}" },
    CharRef { name: "ogon;", characters: "\u{173}" },
    CharRef { name: "plus;", characters: "\u{228e}" },
    CharRef { name: "psih;", characters: "\u{3d2}" },
    CharRef { name: "ring;", characters: "\u{16f}" },
    CharRef { name: "rtri;", characters: "\u{25f9}" },
    CharRef { name: "tdot;", characters: "\u{22f0}" },
    CharRef { name: "trif;", characters: "\u{25b4}" },
    CharRef { name: "uarr;", characters: "\u{21c8}" },
    CharRef { name: "Arr;", characters: "\u{21d1}" },
    CharRef { name: "Har;", characters: "\u{2963}" },
    CharRef { name: "arr;", characters: "\u{2191}" },
    CharRef { name: "circ", characters: "\u{fb}" },
    CharRef { name: "opf;", characters: "\u{1d566}" },
    CharRef { name: "psi;", characters: "\u{3c5}" },
    CharRef { name: "scr;", characters: "\u{1d4ca}" },
    CharRef { name: "tri;", characters: "\u{25b5}" },
    CharRef { name: "uml;", characters: "\u{fc}" },
    CharRef { name: "cy;", characters: "\u{443}" },
    CharRef { name: "fr;", characters: "\u{1d532}" },
    CharRef { name: "ml;", characters: "\u{a8}" },
    CharRef { name: "uml", characters: "\u{fc}" },
    CharRef { name: "ml", characters: "\u{a8}" },
];

static LOWER_V: &[CharRef] = &[
    CharRef { name: "artriangleright;", characters: "\u{22b3}" },
    CharRef { name: "artriangleleft;", characters: "\u{22b2}" },
    CharRef { name: "arsubsetneqq;", characters: "\u{2acb}\u{fe00}" },
    CharRef { name: "arsupsetneqq;", characters: "\u{2acc}\u{fe00}" },
    CharRef { name: "arsubsetneq;", characters: "\u{228a}\u{fe00}" },
    CharRef { name: "arsupsetneq;", characters: "\u{228b}\u{fe00}" },
    CharRef { name: "arepsilon;", characters: "\u{3f5}" },
    CharRef { name: "arnothing;", characters: "\u{2205}" },
    CharRef { name: "arpropto;", characters: "\u{221d}" },
    CharRef { name: "arkappa;", characters: "\u{3f0}" },
    CharRef { name: "arsigma;", characters: "\u{3c2}" },
    CharRef { name: "artheta;", characters: "\u{3d1}" },
    CharRef { name: "zigzag;", characters: "\u{299a}" },
    CharRef { name: "angrt;", characters: "\u{299c}" },
    CharRef { name: "arphi;", characters: "\u{3d5}" },
    CharRef { name: "arrho;", characters: "\u{3f1}" },
    CharRef { name: "eebar;", characters: "\u{22bb}" },
    CharRef { name: "ellip;", characters: "\u{22ee}" },
    CharRef { name: "erbar;", characters: "|" },
    CharRef { name: "subnE;", characters: "\u{2acb}\u{fe00}" },
    CharRef { name: "subne;", characters: "\u{228a}\u{fe00}" },
    CharRef { name: "supnE;", characters: "\u{2acc}\u{fe00}" },
    CharRef { name: "supne;", characters: "\u{228b}\u{fe00}" },
    CharRef { name: "Barv;", characters: "\u{2ae9}" },
    CharRef { name: "Dash;", characters: "\u{22a8}" },
    CharRef { name: "arpi;", characters: "\u{3d6}" },
    CharRef { name: "dash;", characters: "\u{22a2}" },
    CharRef { name: "eeeq;", characters: "\u{225a}" },
    CharRef { name: "ltri;", characters: "\u{22b2}" },
    CharRef { name: "nsub;", characters: "\u{2282}\u{20d2}" },
    CharRef { name: "nsup;", characters: "\u{2283}\u{20d2}" },
    CharRef { name: "prop;", characters: "\u{221d}" },
    CharRef { name: "rtri;", characters: "\u{22b3}" },
    CharRef { name: "Arr;", characters: "\u{21d5}" },
    CharRef { name: "Bar;", characters: "\u{2ae8}" },
    CharRef { name: "arr;", characters: "\u{2195}" },
    CharRef { name: "ert;", characters: "|" },
    CharRef { name: "opf;", characters: "\u{1d567}" },
    CharRef { name: "scr;", characters: "\u{1d4cb}" },
    CharRef { name: "cy;", characters: "\u{432}" },
    CharRef { name: "ee;", characters: "\u{2228}" },
    CharRef { name: "fr;", characters: "\u{1d533}" },
];

static LOWER_W: &[CharRef] = &[
    CharRef { name: "edbar;", characters: "\u{2a5f}" },
    CharRef { name: "edgeq;", characters: "\u{2259}" },
    CharRef { name: "eierp;", characters: "\u{2118}" },
    CharRef { name: "reath;", characters: "\u{2240}" },
    CharRef { name: "circ;", characters: "\u{175}" },
    CharRef { name: "edge;", characters: "\u{2227}" },
    CharRef { name: "opf;", characters: "\u{1d568}" },
    CharRef { name: "scr;", characters: "\u{1d4cc}" },
    CharRef { name: "fr;", characters: "\u{1d534}" },
    CharRef { name: "p;", characters: "\u{2118}" },
    CharRef { name: "r;", characters: "\u{2240}" },
];

static LOWER_X: &[CharRef] = &[
    CharRef { name: "oplus;", characters: "\u{2a01}" },
    CharRef { name: "otime;", characters: "\u{2a02}" },
    CharRef { name: "sqcup;", characters: "\u{2a06}" },
    CharRef { name: "uplus;", characters: "\u{2a04}" },
    CharRef { name: "wedge;", characters: "\u{22c0}" },
    CharRef { name: "circ;", characters: "\u{25ef}" },
    CharRef { name: "dtri;", characters: "\u{25bd}" },
    CharRef { name: "hArr;", characters: "\u{27fa}" },
    CharRef { name: "harr;", characters: "\u{27f7}" },
    CharRef { name: "lArr;", characters: "\u{27f8}" },
    CharRef { name: "larr;", characters: "\u{27f5}" },
    CharRef { name: "odot;", characters: "\u{2a00}" },
    CharRef { name: "rArr;", characters: "\u{27f9}" },
    CharRef { name: "rarr;", characters: "\u{27f6}" },
    CharRef { name: "utri;", characters: "\u{25b3}" },
    CharRef { name: "cap;", characters: "\u{22c2}" },
    CharRef { name: "cup;", characters: "\u{22c3}" },
    CharRef { name: "map;", characters: "\u{27fc}" },
    CharRef { name: "nis;", characters: "\u{22fb}" },
    CharRef { name: "opf;", characters: "\u{1d569}" },
    CharRef { name: "scr;", characters: "\u{1d4cd}" },
    CharRef { name: "vee;", characters: "\u{22c1}" },
    CharRef { name: "fr;", characters: "\u{1d535}" },
    CharRef { name: "i;", characters: "\u{3be}" },
];

static LOWER_Y: &[CharRef] = &[
    CharRef { name: "acute;", characters: "\u{fd}" },
    CharRef { name: "acute", characters: "\u{fd}" },
    CharRef { name: "circ;", characters: "\u{177}" },
    CharRef { name: "acy;", characters: "\u{44f}" },
    CharRef { name: "icy;", characters: "\u{457}" },
    CharRef { name: "opf;", characters: "\u{1d56a}" },
    CharRef { name: "scr;", characters: "\u{1d4ce}" },
    CharRef { name: "ucy;", characters: "\u{44e}" },
    CharRef { name: "uml;", characters: "\u{ff}" },
    CharRef { name: "cy;", characters: "\u{44b}" },
    CharRef { name: "en;", characters: "\u{a5}" },
    CharRef { name: "fr;", characters: "\u{1d536}" },
    CharRef { name: "uml", characters: "\u{ff}" },
    CharRef { name: "en", characters: "\u{a5}" },
];

static LOWER_Z: &[CharRef] = &[
    CharRef { name: "igrarr;", characters: "\u{21dd}" },
    CharRef { name: "acute;", characters: "\u{17a}" },
    CharRef { name: "caron;", characters: "\u{17e}" },
    CharRef { name: "eetrf;", characters: "\u{2128}" },
    CharRef { name: "dot;", characters: "\u{17c}" },
    CharRef { name: "eta;", characters: "\u{3b6}" },
    CharRef { name: "hcy;", characters: "\u{436}" },
    CharRef { name: "opf;", characters: "\u{1d56b}" },
    CharRef { name: "scr;", characters: "\u{1d4cf}" },
    CharRef { name: "wnj;", characters: "\u{200c}" },
    CharRef { name: "cy;", characters: "\u{437}" },
    CharRef { name: "fr;", characters: "\u{1d537}" },
    CharRef { name: "wj;", characters: "\u{200d}" },
];

/// Find the named character reference starting with `first` whose
/// remaining name the input can supply, preferring the longest name.
///
/// `try_read` speculatively consumes the given string from the input and
/// reports whether it matched; on a non-match it must consume nothing.
pub(crate) fn try_read_character_reference<E>(
    first: char,
    mut try_read: impl FnMut(&str) -> Result<bool, E>,
) -> Result<Option<CharRef>, E> {
    let refs: &[CharRef] = match first {
        'A' => UPPER_A,
        'B' => UPPER_B,
        'C' => UPPER_C,
        'D' => UPPER_D,
        'E' => UPPER_E,
        'F' => UPPER_F,
        'G' => UPPER_G,
        'H' => UPPER_H,
        'I' => UPPER_I,
        'J' => UPPER_J,
        'K' => UPPER_K,
        'L' => UPPER_L,
        'M' => UPPER_M,
        'N' => UPPER_N,
        'O' => UPPER_O,
        'P' => UPPER_P,
        'Q' => UPPER_Q,
        'R' => UPPER_R,
        'S' => UPPER_S,
        'T' => UPPER_T,
        'U' => UPPER_U,
        'V' => UPPER_V,
        'W' => UPPER_W,
        'X' => UPPER_X,
        'Y' => UPPER_Y,
        'Z' => UPPER_Z,
        'a' => LOWER_A,
        'b' => LOWER_B,
        'c' => LOWER_C,
        'd' => LOWER_D,
        'e' => LOWER_E,
        'f' => LOWER_F,
        'g' => LOWER_G,
        'h' => LOWER_H,
        'i' => LOWER_I,
        'j' => LOWER_J,
        'k' => LOWER_K,
        'l' => LOWER_L,
        'm' => LOWER_M,
        'n' => LOWER_N,
        'o' => LOWER_O,
        'p' => LOWER_P,
        'q' => LOWER_Q,
        'r' => LOWER_R,
        's' => LOWER_S,
        't' => LOWER_T,
        'u' => LOWER_U,
        'v' => LOWER_V,
        'w' => LOWER_W,
        'x' => LOWER_X,
        'y' => LOWER_Y,
        'z' => LOWER_Z,
        _ => return Ok(None),
    };

    for char_ref in refs {
        if try_read(char_ref.name)? {
            return Ok(Some(*char_ref));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn lookup(input: &str) -> Option<(String, String)> {
        let mut chars = input.chars();
        let first = chars.next().unwrap();
        let rest: String = chars.collect();
        let r: Result<_, Infallible> = try_read_character_reference(first, |name| {
            Ok(rest.starts_with(name))
        });
        r.unwrap()
            .map(|c| (format!("{}{}", first, c.name), c.characters.to_owned()))
    }

    #[test]
    fn table_covers_the_whatwg_set() {
        let count: usize = [
            UPPER_A.len(), UPPER_B.len(), UPPER_C.len(), UPPER_D.len(), UPPER_E.len(), UPPER_F.len(), UPPER_G.len(), UPPER_H.len(), UPPER_I.len(), UPPER_J.len(), UPPER_K.len(), UPPER_L.len(),
            UPPER_M.len(), UPPER_N.len(), UPPER_O.len(), UPPER_P.len(), UPPER_Q.len(), UPPER_R.len(), UPPER_S.len(), UPPER_T.len(), UPPER_U.len(), UPPER_V.len(), UPPER_W.len(), UPPER_X.len(),
            UPPER_Y.len(), UPPER_Z.len(), LOWER_A.len(), LOWER_B.len(), LOWER_C.len(), LOWER_D.len(), LOWER_E.len(), LOWER_F.len(), LOWER_G.len(), LOWER_H.len(), LOWER_I.len(), LOWER_J.len(),
            LOWER_K.len(), LOWER_L.len(), LOWER_M.len(), LOWER_N.len(), LOWER_O.len(), LOWER_P.len(), LOWER_Q.len(), LOWER_R.len(), LOWER_S.len(), LOWER_T.len(), LOWER_U.len(), LOWER_V.len(),
            LOWER_W.len(), LOWER_X.len(), LOWER_Y.len(), LOWER_Z.len(),
        ]
        .iter()
        .sum();
        assert_eq!(count, 2231);
    }

    #[test]
    fn max_munch_prefers_the_semicolon_form() {
        assert_eq!(lookup("amp;"), Some(("amp;".into(), "&".into())));
        assert_eq!(lookup("ampx"), Some(("amp".into(), "&".into())));
        assert_eq!(lookup("notinva;"), Some(("notinva;".into(), "\u{2209}".into())));
        assert_eq!(lookup("xyzzy"), None);
    }
}
