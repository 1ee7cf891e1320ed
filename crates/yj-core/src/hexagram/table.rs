//! The 64 hexagrams in King Wen order.
//!
//! Keys read the upper trigram first: the first three characters are the
//! upper trigram, the last three the lower trigram.

use super::Hexagram;

/// All 64 hexagrams, ordered by their traditional index.
pub static HEXAGRAMS: [Hexagram; 64] = [
    Hexagram {
        index: 1,
        key: "111111",
        name: "乾为天",
        judgment: "元亨利贞。",
        image: "天行健，君子以自强不息。",
    },
    Hexagram {
        index: 2,
        key: "000000",
        name: "坤为地",
        judgment: "元亨，利牝马之贞。君子有攸往，先迷后得主。利西南得朋，东北丧朋。安贞吉。",
        image: "地势坤，君子以厚德载物。",
    },
    Hexagram {
        index: 3,
        key: "010001",
        name: "水雷屯",
        judgment: "元亨利贞，勿用有攸往，利建侯。",
        image: "云雷屯，君子以经纶。",
    },
    Hexagram {
        index: 4,
        key: "011010",
        name: "山水蒙",
        judgment: "亨。匪我求童蒙，童蒙求我。初筮告，再三渎，渎则不告。利贞。",
        image: "山下出泉，蒙；君子以果行育德。",
    },
    Hexagram {
        index: 5,
        key: "010111",
        name: "水天需",
        judgment: "有孚，光亨，贞吉。利涉大川。",
        image: "云上于天，需；君子以饮食宴乐。",
    },
    Hexagram {
        index: 6,
        key: "111010",
        name: "天水讼",
        judgment: "有孚窒惕，中吉，终凶。利见大人，不利涉大川。",
        image: "天与水违行，讼；君子以作事谋始。",
    },
    Hexagram {
        index: 7,
        key: "000010",
        name: "地水师",
        judgment: "贞吉，无咎，有孚，中行，无所利，有攸往。",
        image: "地中有水，师；君子以容民畜众。",
    },
    Hexagram {
        index: 8,
        key: "010000",
        name: "水地比",
        judgment: "吉。原筮元永贞，无咎。不宁方来，后夫凶。",
        image: "地上有水，比；先王以建万国，亲诸侯。",
    },
    Hexagram {
        index: 9,
        key: "110111",
        name: "风天小畜",
        judgment: "亨。密云不雨，自我西郊。",
        image: "风行天上，小畜；君子以懿文德。",
    },
    Hexagram {
        index: 10,
        key: "111100",
        name: "天泽履",
        judgment: "履虎尾，不咥人，亨。",
        image: "上天下泽，履；君子以辨上下，定民志。",
    },
    Hexagram {
        index: 11,
        key: "000111",
        name: "地天泰",
        judgment: "小往大来，吉亨。",
        image: "天地交，泰；后以财成天地之道，辅相天地之宜，以左右民。",
    },
    Hexagram {
        index: 12,
        key: "111000",
        name: "天地否",
        judgment: "否之匪人，不利君子贞，大往小来。",
        image: "天地不交，否；君子以俭德辟难，不可荣以禄。",
    },
    Hexagram {
        index: 13,
        key: "111101",
        name: "天火同人",
        judgment: "同人于野，亨。利涉大川，利君子贞。",
        image: "天与火，同人；君子以类族辨物。",
    },
    Hexagram {
        index: 14,
        key: "101111",
        name: "火天大有",
        judgment: "元亨。",
        image: "火在天上，大有；君子以遏恶扬善，顺天休命。",
    },
    Hexagram {
        index: 15,
        key: "000011",
        name: "地山谦",
        judgment: "亨，君子有终。",
        image: "地中有山，谦；君子以裒多益寡，称物平施。",
    },
    Hexagram {
        index: 16,
        key: "001000",
        name: "雷地豫",
        judgment: "利建侯行师。",
        image: "雷出地奋，豫；先王以作乐崇德，殷荐之上帝，以配祖考。",
    },
    Hexagram {
        index: 17,
        key: "100001",
        name: "泽雷随",
        judgment: "元亨利贞，无咎。",
        image: "泽中有雷，随；君子以向晦入宴息。",
    },
    Hexagram {
        index: 18,
        key: "011110",
        name: "山风蛊",
        judgment: "元亨，利涉大川。先甲三日，后甲三日。",
        image: "山下有风，蛊；君子以振民育德。",
    },
    Hexagram {
        index: 19,
        key: "000100",
        name: "地泽临",
        judgment: "元亨利贞，至于八月有凶。",
        image: "泽上有地，临；君子以教思无穷，容保民无疆。",
    },
    Hexagram {
        index: 20,
        key: "110000",
        name: "风地观",
        judgment: "盥而不荐，有孚颙若。",
        image: "风行地上，观；先王以省方观民设教。",
    },
    Hexagram {
        index: 21,
        key: "101001",
        name: "火雷噬嗑",
        judgment: "亨。利用狱。",
        image: "雷电噬嗑；君子以慎罚足以警。",
    },
    Hexagram {
        index: 22,
        key: "011101",
        name: "山火贲",
        judgment: "亨。小利有攸往。",
        image: "山下有火，贲；君子以明庶政，无敢折狱。",
    },
    Hexagram {
        index: 23,
        key: "011000",
        name: "山地剥",
        judgment: "不利有攸往。",
        image: "山附于地，剥；上以厚下，安宅。",
    },
    Hexagram {
        index: 24,
        key: "000001",
        name: "地雷复",
        judgment: "亨。出入无疾，朋来无咎。反复其道，七日来复，利有攸往。",
        image: "雷在地中，复；先王以至日闭关，商旅不行，后不省方。",
    },
    Hexagram {
        index: 25,
        key: "111001",
        name: "天雷无妄",
        judgment: "元亨利贞。其匪正有眚，不利有攸往。",
        image: "天下雷行，物与无妄；先王以茂对时，育万物。",
    },
    Hexagram {
        index: 26,
        key: "011111",
        name: "山天大畜",
        judgment: "利贞，不家食吉，利涉大川。",
        image: "天在山中，大畜；君子以多识前言往行，以畜其德。",
    },
    Hexagram {
        index: 27,
        key: "011001",
        name: "山雷颐",
        judgment: "贞吉。观颐，自求口实。",
        image: "山下有雷，颐；君子以慎言语，节饮食。",
    },
    Hexagram {
        index: 28,
        key: "100110",
        name: "泽风大过",
        judgment: "栋挠，利有攸往，亨。",
        image: "泽灭木，大过；君子以独立不惧，遁世无闷。",
    },
    Hexagram {
        index: 29,
        key: "010010",
        name: "坎为水",
        judgment: "习坎，有孚，维心亨，行有尚。",
        image: "水洊至，习坎；君子以常德行，习教事。",
    },
    Hexagram {
        index: 30,
        key: "101101",
        name: "离为火",
        judgment: "利贞，亨。畜牝牛，吉。",
        image: "明两作，离；大人以继明照于四方。",
    },
    Hexagram {
        index: 31,
        key: "100011",
        name: "泽山咸",
        judgment: "亨，利贞，取女吉。",
        image: "山上有泽，咸；君子以虚受人。",
    },
    Hexagram {
        index: 32,
        key: "001110",
        name: "雷风恒",
        judgment: "亨，无咎，利贞，利有攸往。",
        image: "雷风，恒；君子以立不易方。",
    },
    Hexagram {
        index: 33,
        key: "111011",
        name: "天山遁",
        judgment: "亨，小利贞。",
        image: "天下有山，遁；君子以远小人，不恶而严。",
    },
    Hexagram {
        index: 34,
        key: "001111",
        name: "雷天大壮",
        judgment: "利贞。",
        image: "雷在天上，大壮；君子以非礼弗履。",
    },
    Hexagram {
        index: 35,
        key: "101000",
        name: "火地晋",
        judgment: "晋如，康侯用锡马蕃庶，昼日三接。",
        image: "明出地上，晋；君子以自昭明德。",
    },
    Hexagram {
        index: 36,
        key: "000101",
        name: "地火明夷",
        judgment: "利艰贞。",
        image: "明入地中，明夷；君子以莅众，用晦而明。",
    },
    Hexagram {
        index: 37,
        key: "110101",
        name: "风火家人",
        judgment: "利女贞。",
        image: "风自火出，家人；君子以言有物而行有恒。",
    },
    Hexagram {
        index: 38,
        key: "101100",
        name: "火泽睽",
        judgment: "小事吉。",
        image: "上火下泽，睽；君子以同而异。",
    },
    Hexagram {
        index: 39,
        key: "010011",
        name: "水山蹇",
        judgment: "利西南，不利东北；利见大人，贞吉。",
        image: "山上有水，蹇；君子以反身修德。",
    },
    Hexagram {
        index: 40,
        key: "001010",
        name: "雷水解",
        judgment: "利西南，无所往，其来复吉。有攸往，夙吉。",
        image: "雷雨作，解；君子以赦过宥罪。",
    },
    Hexagram {
        index: 41,
        key: "011100",
        name: "山泽损",
        judgment: "有孚，元吉，无咎，可贞，利有攸往。曷之用，二簋可用享。",
        image: "山下有泽，损；君子以惩忿窒欲。",
    },
    Hexagram {
        index: 42,
        key: "110001",
        name: "风雷益",
        judgment: "利有攸往，利涉大川。",
        image: "风雷，益；君子以见善则迁，有过则改。",
    },
    Hexagram {
        index: 43,
        key: "100111",
        name: "泽天夬",
        judgment: "扬于王庭，孚号，有厉，告自邑，不利即戎，利有攸往。",
        image: "泽上于天，夬；君子以施禄及下，居德则忌。",
    },
    Hexagram {
        index: 44,
        key: "111110",
        name: "天风姤",
        judgment: "女壮，勿用取女。",
        image: "天下有风，姤；后以施命诰四方。",
    },
    Hexagram {
        index: 45,
        key: "100000",
        name: "泽地萃",
        judgment: "亨。王假有庙，利见大人，亨，利贞。用大牲吉，利有攸往。",
        image: "泽上于地，萃；君子以除戎器，戒不虞。",
    },
    Hexagram {
        index: 46,
        key: "000110",
        name: "地风升",
        judgment: "元亨，用见大人，勿恤，南征吉。",
        image: "地中生木，升；君子以顺德，积小以高大。",
    },
    Hexagram {
        index: 47,
        key: "100010",
        name: "泽水困",
        judgment: "亨，贞，大人吉，无咎，有言不信。",
        image: "泽无水，困；君子以致命遂志。",
    },
    Hexagram {
        index: 48,
        key: "010110",
        name: "水风井",
        judgment: "改邑不改井，无丧无得，往来井井。汔至，亦未繘井，羸其瓶，凶。",
        image: "木上有水，井；君子以劳民劝相。",
    },
    Hexagram {
        index: 49,
        key: "100101",
        name: "泽火革",
        judgment: "巳日乃孚，元亨利贞，悔亡。",
        image: "泽中有火，革；君子以治历明时。",
    },
    Hexagram {
        index: 50,
        key: "101110",
        name: "火风鼎",
        judgment: "元吉，亨。",
        image: "木上有火，鼎；君子以正位凝命。",
    },
    Hexagram {
        index: 51,
        key: "001001",
        name: "震为雷",
        judgment: "亨。震来虩虩，笑言哑哑。震惊百里，不丧匕鬯。",
        image: "洊雷，震；君子以恐惧修省。",
    },
    Hexagram {
        index: 52,
        key: "011011",
        name: "艮为山",
        judgment: "艮其背，不获其身，行其庭，不见其人，无咎。",
        image: "兼山，艮；君子以思不出其位。",
    },
    Hexagram {
        index: 53,
        key: "110011",
        name: "风山渐",
        judgment: "女归吉，利贞。",
        image: "山上有木，渐；君子以居贤德善俗。",
    },
    Hexagram {
        index: 54,
        key: "001100",
        name: "雷泽归妹",
        judgment: "征凶，无攸利。",
        image: "泽上有雷，归妹；君子以永终知敝。",
    },
    Hexagram {
        index: 55,
        key: "001101",
        name: "雷火丰",
        judgment: "亨，王假之，勿忧，宜日中。",
        image: "雷电皆至，丰；君子以折狱致刑。",
    },
    Hexagram {
        index: 56,
        key: "101011",
        name: "火山旅",
        judgment: "小亨，旅贞吉。",
        image: "山上有火，旅；君子以明慎用刑，而不留狱。",
    },
    Hexagram {
        index: 57,
        key: "110110",
        name: "巽为风",
        judgment: "小亨，利有攸往，利见大人。",
        image: "随风，巽；君子以申命行事。",
    },
    Hexagram {
        index: 58,
        key: "100100",
        name: "兑为泽",
        judgment: "亨，利贞。",
        image: "丽泽，兑；君子以朋友讲习。",
    },
    Hexagram {
        index: 59,
        key: "110010",
        name: "风水涣",
        judgment: "亨，王假有庙，利涉大川，利贞。",
        image: "风行水上，涣；先王以享于帝，立庙。",
    },
    Hexagram {
        index: 60,
        key: "010100",
        name: "水泽节",
        judgment: "亨，苦节不可贞。",
        image: "泽上有水，节；君子以制数度，议德行。",
    },
    Hexagram {
        index: 61,
        key: "110100",
        name: "风泽中孚",
        judgment: "豚鱼吉，利涉大川，利贞。",
        image: "泽上有风，中孚；君子以议狱缓死。",
    },
    Hexagram {
        index: 62,
        key: "001011",
        name: "雷山小过",
        judgment: "亨，利贞，可小事，不可大事。飞鸟遗之音，不宜上，宜下，大吉。",
        image: "山上有雷，小过；君子以行过乎恭，丧过乎哀，用过乎俭。",
    },
    Hexagram {
        index: 63,
        key: "010101",
        name: "水火既济",
        judgment: "亨，小利贞，初吉终乱。",
        image: "水在火上，既济；君子以思患而豫防之。",
    },
    Hexagram {
        index: 64,
        key: "101010",
        name: "火水未济",
        judgment: "亨，小狐汔济，濡其尾，无攸利。",
        image: "火在水上，未济；君子以慎辨物居方。",
    },
];
