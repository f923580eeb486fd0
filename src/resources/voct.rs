//! V/oct exponential response.
//!
//! Raw `UFix<6,16>` values of `2^(5 * cv / 1023)`: five octaves across the
//! 10-bit V/oct input, from a factor of exactly 1.0 to exactly 32.0.

pub const LUT_VOCT_SIZE: usize = 1024;

pub static LUT_VOCT: [u32; LUT_VOCT_SIZE] = [
    65536, 65758, 65982, 66205, 66430, 66656, 66882, 67109,
    67336, 67565, 67794, 68024, 68255, 68487, 68719, 68952,
    69186, 69421, 69657, 69893, 70130, 70368, 70607, 70847,
    71087, 71328, 71570, 71813, 72057, 72302, 72547, 72793,
    73040, 73288, 73537, 73786, 74037, 74288, 74540, 74793,
    75047, 75302, 75557, 75813, 76071, 76329, 76588, 76848,
    77109, 77370, 77633, 77896, 78161, 78426, 78692, 78959,
    79227, 79496, 79766, 80036, 80308, 80580, 80854, 81128,
    81404, 81680, 81957, 82235, 82514, 82794, 83075, 83357,
    83640, 83924, 84209, 84494, 84781, 85069, 85358, 85647,
    85938, 86230, 86522, 86816, 87110, 87406, 87703, 88000,
    88299, 88599, 88899, 89201, 89504, 89807, 90112, 90418,
    90725, 91033, 91342, 91652, 91963, 92275, 92588, 92902,
    93217, 93534, 93851, 94169, 94489, 94810, 95131, 95454,
    95778, 96103, 96429, 96757, 97085, 97414, 97745, 98077,
    98410, 98743, 99079, 99415, 99752, 100091, 100430, 100771,
    101113, 101456, 101801, 102146, 102493, 102840, 103189, 103540,
    103891, 104244, 104597, 104952, 105308, 105666, 106024, 106384,
    106745, 107107, 107471, 107836, 108202, 108569, 108937, 109307,
    109678, 110050, 110424, 110798, 111174, 111552, 111930, 112310,
    112691, 113073, 113457, 113842, 114229, 114616, 115005, 115395,
    115787, 116180, 116574, 116970, 117367, 117765, 118165, 118566,
    118968, 119372, 119777, 120183, 120591, 121000, 121411, 121823,
    122237, 122651, 123068, 123485, 123904, 124325, 124747, 125170,
    125595, 126021, 126449, 126878, 127308, 127740, 128174, 128609,
    129045, 129483, 129923, 130363, 130806, 131250, 131695, 132142,
    132590, 133040, 133492, 133945, 134399, 134856, 135313, 135772,
    136233, 136695, 137159, 137625, 138092, 138560, 139031, 139503,
    139976, 140451, 140928, 141406, 141886, 142367, 142850, 143335,
    143822, 144310, 144799, 145291, 145784, 146278, 146775, 147273,
    147773, 148274, 148777, 149282, 149789, 150297, 150807, 151319,
    151833, 152348, 152865, 153384, 153904, 154426, 154950, 155476,
    156004, 156533, 157064, 157597, 158132, 158669, 159207, 159748,
    160290, 160834, 161379, 161927, 162477, 163028, 163581, 164136,
    164693, 165252, 165813, 166376, 166940, 167507, 168075, 168646,
    169218, 169792, 170369, 170947, 171527, 172109, 172693, 173279,
    173867, 174457, 175049, 175643, 176239, 176837, 177437, 178039,
    178644, 179250, 179858, 180469, 181081, 181696, 182312, 182931,
    183552, 184174, 184799, 185427, 186056, 186687, 187321, 187956,
    188594, 189234, 189877, 190521, 191167, 191816, 192467, 193120,
    193776, 194433, 195093, 195755, 196419, 197086, 197755, 198426,
    199099, 199775, 200453, 201133, 201816, 202501, 203188, 203877,
    204569, 205263, 205960, 206659, 207360, 208064, 208770, 209478,
    210189, 210903, 211618, 212336, 213057, 213780, 214505, 215233,
    215964, 216697, 217432, 218170, 218910, 219653, 220399, 221147,
    221897, 222650, 223406, 224164, 224924, 225688, 226454, 227222,
    227993, 228767, 229543, 230322, 231104, 231888, 232675, 233465,
    234257, 235052, 235850, 236650, 237453, 238259, 239067, 239879,
    240693, 241510, 242329, 243151, 243977, 244805, 245635, 246469,
    247305, 248145, 248987, 249832, 250679, 251530, 252384, 253240,
    254100, 254962, 255827, 256695, 257566, 258440, 259317, 260197,
    261080, 261966, 262855, 263747, 264642, 265541, 266442, 267346,
    268253, 269163, 270077, 270993, 271913, 272836, 273762, 274691,
    275623, 276558, 277497, 278438, 279383, 280331, 281283, 282237,
    283195, 284156, 285120, 286088, 287059, 288033, 289011, 289991,
    290975, 291963, 292954, 293948, 294945, 295946, 296951, 297958,
    298969, 299984, 301002, 302023, 303048, 304077, 305109, 306144,
    307183, 308225, 309271, 310321, 311374, 312431, 313491, 314555,
    315622, 316693, 317768, 318846, 319929, 321014, 322104, 323197,
    324293, 325394, 326498, 327606, 328718, 329833, 330953, 332076,
    333203, 334334, 335468, 336607, 337749, 338895, 340045, 341199,
    342357, 343519, 344685, 345854, 347028, 348206, 349387, 350573,
    351763, 352956, 354154, 355356, 356562, 357772, 358986, 360204,
    361427, 362653, 363884, 365119, 366358, 367601, 368848, 370100,
    371356, 372616, 373881, 375150, 376423, 377700, 378982, 380268,
    381558, 382853, 384153, 385456, 386764, 388077, 389394, 390715,
    392041, 393371, 394706, 396046, 397390, 398738, 400092, 401449,
    402812, 404179, 405550, 406926, 408307, 409693, 411083, 412478,
    413878, 415283, 416692, 418106, 419525, 420949, 422377, 423810,
    425249, 426692, 428140, 429593, 431051, 432513, 433981, 435454,
    436932, 438414, 439902, 441395, 442893, 444396, 445904, 447417,
    448935, 450459, 451988, 453521, 455061, 456605, 458154, 459709,
    461269, 462834, 464405, 465981, 467562, 469149, 470741, 472339,
    473942, 475550, 477164, 478783, 480408, 482038, 483674, 485315,
    486962, 488615, 490273, 491937, 493606, 495281, 496962, 498649,
    500341, 502039, 503742, 505452, 507167, 508888, 510615, 512348,
    514087, 515831, 517582, 519338, 521101, 522869, 524643, 526424,
    528210, 530003, 531801, 533606, 535417, 537234, 539057, 540886,
    542722, 544564, 546412, 548266, 550126, 551993, 553867, 555746,
    557632, 559524, 561423, 563328, 565240, 567158, 569083, 571014,
    572952, 574896, 576847, 578805, 580769, 582740, 584718, 586702,
    588693, 590691, 592695, 594706, 596725, 598750, 600782, 602820,
    604866, 606919, 608978, 611045, 613119, 615199, 617287, 619382,
    621484, 623593, 625709, 627832, 629963, 632101, 634246, 636398,
    638558, 640725, 642899, 645081, 647270, 649466, 651670, 653882,
    656101, 658327, 660561, 662803, 665052, 667309, 669574, 671846,
    674126, 676414, 678709, 681012, 683323, 685642, 687969, 690304,
    692646, 694997, 697355, 699722, 702097, 704479, 706870, 709269,
    711676, 714091, 716514, 718946, 721385, 723833, 726290, 728754,
    731228, 733709, 736199, 738697, 741204, 743719, 746243, 748776,
    751317, 753866, 756425, 758992, 761567, 764152, 766745, 769347,
    771958, 774577, 777206, 779843, 782490, 785145, 787810, 790483,
    793166, 795857, 798558, 801268, 803987, 806716, 809453, 812200,
    814957, 817722, 820497, 823282, 826075, 828879, 831692, 834514,
    837346, 840188, 843039, 845900, 848770, 851651, 854541, 857441,
    860351, 863270, 866200, 869139, 872089, 875048, 878018, 880997,
    883987, 886987, 889997, 893017, 896048, 899089, 902140, 905201,
    908273, 911355, 914448, 917551, 920665, 923789, 926924, 930070,
    933226, 936393, 939571, 942759, 945959, 949169, 952390, 955622,
    958865, 962119, 965384, 968660, 971947, 975245, 978555, 981876,
    985208, 988551, 991906, 995272, 998649, 1002038, 1005439, 1008851,
    1012274, 1015710, 1019157, 1022615, 1026085, 1029568, 1033061, 1036567,
    1040085, 1043614, 1047156, 1050710, 1054275, 1057853, 1061443, 1065045,
    1068659, 1072286, 1075925, 1079576, 1083239, 1086916, 1090604, 1094305,
    1098019, 1101745, 1105484, 1109235, 1112999, 1116777, 1120566, 1124369,
    1128185, 1132013, 1135855, 1139709, 1143577, 1147458, 1151352, 1155259,
    1159179, 1163113, 1167060, 1171021, 1174995, 1178982, 1182983, 1186998,
    1191026, 1195068, 1199123, 1203192, 1207276, 1211373, 1215483, 1219608,
    1223747, 1227900, 1232067, 1236248, 1240443, 1244653, 1248877, 1253115,
    1257367, 1261634, 1265916, 1270212, 1274522, 1278847, 1283187, 1287542,
    1291911, 1296295, 1300694, 1305108, 1309537, 1313981, 1318440, 1322914,
    1327404, 1331908, 1336428, 1340964, 1345514, 1350080, 1354662, 1359259,
    1363872, 1368500, 1373144, 1377804, 1382480, 1387171, 1391879, 1396602,
    1401342, 1406097, 1410869, 1415657, 1420461, 1425281, 1430118, 1434971,
    1439841, 1444727, 1449630, 1454549, 1459485, 1464438, 1469408, 1474394,
    1479398, 1484418, 1489456, 1494510, 1499582, 1504671, 1509777, 1514901,
    1520042, 1525200, 1530376, 1535569, 1540780, 1546009, 1551255, 1556520,
    1561802, 1567102, 1572420, 1577756, 1583110, 1588483, 1593873, 1599282,
    1604710, 1610155, 1615619, 1621102, 1626603, 1632123, 1637662, 1643220,
    1648796, 1654391, 1660006, 1665639, 1671291, 1676963, 1682654, 1688364,
    1694094, 1699843, 1705611, 1711399, 1717207, 1723034, 1728882, 1734749,
    1740636, 1746543, 1752470, 1758417, 1764384, 1770372, 1776379, 1782408,
    1788456, 1794526, 1800615, 1806726, 1812857, 1819009, 1825182, 1831376,
    1837591, 1843827, 1850084, 1856362, 1862662, 1868983, 1875326, 1881690,
    1888075, 1894483, 1900912, 1907362, 1913835, 1920330, 1926847, 1933386,
    1939947, 1946530, 1953136, 1959764, 1966414, 1973087, 1979783, 1986502,
    1993243, 2000007, 2006794, 2013605, 2020438, 2027294, 2034174, 2041077,
    2048004, 2054954, 2061927, 2068925, 2075946, 2082990, 2090059, 2097152,
];
