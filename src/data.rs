//! Seed datasets loaded by the init-database operation.
//!
//! Japanese entries carry kanji plus a hiragana reading and come from the
//! Meiji Yasuda annual rankings; Korean entries are hangul-only and come from
//! the national statistics office. Every rank is within 1..=10, which the
//! trend and similarity code relies on.

use crate::store::{Gender, NameRecord};

fn record(
    display: &str,
    reading: Option<&str>,
    gender: Gender,
    ranks: &[(i32, u8)],
    tags: &[&str],
    source: &str,
) -> NameRecord {
    NameRecord {
        display: display.to_string(),
        reading: reading.map(str::to_string),
        gender,
        yearly_ranks: ranks.iter().copied().collect(),
        characteristics: tags.iter().map(|t| t.to_string()).collect(),
        source: source.to_string(),
    }
}

fn jp(kanji: &str, reading: &str, gender: Gender, ranks: &[(i32, u8)], tags: &[&str]) -> NameRecord {
    record(kanji, Some(reading), gender, ranks, tags, "MeijiYasuda")
}

fn kr(hangul: &str, gender: Gender, ranks: &[(i32, u8)], tags: &[&str]) -> NameRecord {
    record(hangul, None, gender, ranks, tags, "통계청")
}

/// The Japanese seed table: 30 male and 30 female names, spanning the Showa,
/// Heisei, and Reiwa eras.
pub fn japanese_seed() -> Vec<NameRecord> {
    use Gender::{F, M};
    vec![
        // Male, Showa early-mid
        jp("博", "ひろし", M, &[(1960, 2), (1961, 1), (1962, 1), (1963, 2), (1964, 3), (1965, 4), (1970, 8)], &["전통적", "안정감"]),
        jp("勝", "まさる", M, &[(1960, 4), (1961, 3), (1962, 3), (1963, 4), (1964, 5), (1965, 6), (1970, 9)], &["전통적", "남성적"]),
        jp("進", "すすむ", M, &[(1962, 6), (1963, 5), (1964, 4), (1965, 5), (1966, 6), (1967, 7), (1970, 10)], &["진취적", "미래지향적"]),
        jp("隆", "たかし", M, &[(1965, 8), (1966, 7), (1967, 6), (1968, 5), (1969, 6), (1970, 7), (1975, 9)], &["전통적", "웅대함"]),
        jp("誠", "まこと", M, &[(1968, 3), (1969, 2), (1970, 2), (1971, 3), (1972, 4), (1973, 5), (1975, 7)], &["성실함", "진실함"]),
        // Male, Showa mid-late
        jp("健", "けん", M, &[(1975, 3), (1976, 2), (1977, 2), (1978, 3), (1979, 4), (1980, 5), (1985, 8)], &["건강함", "활력"]),
        jp("大輔", "だいすけ", M, &[(1975, 5), (1976, 4), (1977, 3), (1978, 2), (1979, 2), (1980, 3), (1985, 6)], &["도움", "지원"]),
        jp("秀樹", "ひでき", M, &[(1978, 6), (1979, 5), (1980, 4), (1981, 3), (1982, 4), (1983, 5), (1985, 7)], &["우수함", "자연적"]),
        jp("智", "さとし", M, &[(1979, 7), (1980, 6), (1981, 5), (1982, 5), (1983, 6), (1984, 7), (1985, 8)], &["지혜", "현명함"]),
        jp("聡", "そう", M, &[(1980, 7), (1981, 6), (1982, 6), (1983, 7), (1984, 8), (1985, 9), (1990, 8)], &["영리함", "민첩함"]),
        // Male, Showa late to Heisei early
        jp("翔太", "しょうた", M, &[(1985, 2), (1986, 1), (1987, 1), (1988, 2), (1989, 3), (1990, 4), (1995, 8)], &["역동적", "젊음"]),
        jp("拓也", "たくや", M, &[(1985, 4), (1986, 3), (1987, 3), (1988, 4), (1989, 5), (1990, 6), (1995, 9)], &["개척정신", "확장"]),
        jp("健太", "けんた", M, &[(1988, 5), (1989, 4), (1990, 3), (1991, 3), (1992, 4), (1993, 5), (1995, 7)], &["건강함", "활기"]),
        jp("大樹", "だいき", M, &[(1990, 7), (1991, 6), (1992, 5), (1993, 6), (1994, 7), (1995, 8), (2000, 10)], &["웅대함", "자연적"]),
        jp("裕太", "ゆうた", M, &[(1990, 5), (1991, 4), (1992, 3), (1993, 4), (1994, 5), (1995, 6), (2000, 9)], &["여유로움", "관대함"]),
        // Male, Heisei early
        jp("大翔", "ひろと", M, &[(1995, 2), (1996, 1), (1997, 1), (1998, 2), (1999, 3), (2000, 4), (2005, 8)], &["웅대함", "비상"]),
        jp("蓮", "れん", M, &[(1995, 3), (1996, 2), (1997, 3), (1998, 4), (1999, 5), (2000, 6), (2005, 9)], &["자연적", "순수함"]),
        jp("海斗", "かいと", M, &[(1998, 5), (1999, 4), (2000, 3), (2001, 3), (2002, 4), (2003, 5), (2005, 7)], &["자연적", "역동적"]),
        jp("翼", "つばさ", M, &[(2000, 7), (2001, 6), (2002, 5), (2003, 6), (2004, 7), (2005, 8), (2010, 10)], &["자유로움", "비상"]),
        jp("颯太", "そうた", M, &[(2000, 5), (2001, 4), (2002, 3), (2003, 4), (2004, 5), (2005, 6), (2010, 9)], &["시원함", "활기"]),
        // Male, Heisei mid-late
        jp("陽翔", "はると", M, &[(2005, 2), (2006, 1), (2007, 1), (2008, 1), (2009, 2), (2010, 3), (2015, 6)], &["밝음", "비상"]),
        jp("湊", "みなと", M, &[(2005, 3), (2006, 2), (2007, 2), (2008, 3), (2009, 4), (2010, 5), (2015, 8)], &["만남", "소통"]),
        jp("悠真", "ゆうま", M, &[(2008, 4), (2009, 3), (2010, 2), (2011, 2), (2012, 3), (2013, 4), (2015, 7)], &["여유로움", "진실함"]),
        jp("結翔", "ゆいと", M, &[(2010, 6), (2011, 5), (2012, 4), (2013, 3), (2014, 4), (2015, 5), (2020, 8)], &["연결", "비상"]),
        jp("碧", "あお", M, &[(2010, 8), (2011, 7), (2012, 6), (2013, 5), (2014, 6), (2015, 7), (2020, 9)], &["자연적", "신선함"]),
        // Male, Heisei late to Reiwa
        jp("蒼", "あおい", M, &[(2015, 2), (2016, 1), (2017, 1), (2018, 2), (2019, 3), (2020, 4), (2024, 7)], &["자연적", "청량함"]),
        jp("律", "りつ", M, &[(2015, 4), (2016, 3), (2017, 3), (2018, 4), (2019, 5), (2020, 6), (2024, 8)], &["질서", "규칙성"]),
        jp("樹", "いつき", M, &[(2018, 5), (2019, 4), (2020, 3), (2021, 3), (2022, 4), (2023, 5), (2024, 6)], &["자연적", "성장"]),
        jp("凪", "なぎ", M, &[(2020, 7), (2021, 6), (2022, 5), (2023, 4), (2024, 3)], &["고요함", "평온"]),
        jp("新", "あらた", M, &[(2020, 5), (2021, 4), (2022, 3), (2023, 3), (2024, 4)], &["새로움", "혁신"]),
        // Female, Showa early-mid
        jp("恵", "めぐみ", F, &[(1960, 1), (1961, 1), (1962, 2), (1963, 3), (1964, 4), (1965, 5), (1970, 8)], &["은혜", "자비"]),
        jp("直美", "なおみ", F, &[(1965, 2), (1966, 1), (1967, 1), (1968, 1), (1969, 2), (1970, 3), (1975, 7)], &["정직함", "아름다움"]),
        jp("洋子", "ようこ", F, &[(1960, 4), (1961, 3), (1962, 2), (1963, 2), (1964, 3), (1965, 4), (1970, 8)], &["서구적", "개방적"]),
        jp("真理", "まり", F, &[(1960, 6), (1961, 5), (1962, 4), (1963, 4), (1964, 5), (1965, 6), (1970, 9)], &["진리", "이성적"]),
        jp("愛", "あい", F, &[(1965, 5), (1966, 4), (1967, 3), (1968, 3), (1969, 4), (1970, 5), (1975, 8)], &["사랑", "애정"]),
        // Female, Showa mid-late
        jp("恵子", "けいこ", F, &[(1975, 2), (1976, 1), (1977, 1), (1978, 2), (1979, 3), (1980, 4), (1985, 7)], &["은혜", "전통적"]),
        jp("由美", "ゆみ", F, &[(1975, 3), (1976, 2), (1977, 2), (1978, 3), (1979, 4), (1980, 5), (1985, 8)], &["자유로움", "아름다움"]),
        jp("真由美", "まゆみ", F, &[(1978, 4), (1979, 3), (1980, 2), (1981, 2), (1982, 3), (1983, 4), (1985, 6)], &["진실함", "아름다움"]),
        jp("智子", "ともこ", F, &[(1980, 6), (1981, 5), (1982, 4), (1983, 3), (1984, 4), (1985, 5), (1990, 8)], &["지혜", "현명함"]),
        jp("裕子", "ゆうこ", F, &[(1982, 5), (1983, 4), (1984, 3), (1985, 2), (1986, 3), (1987, 4), (1990, 7)], &["여유로움", "관대함"]),
        // Female, Showa late to Heisei early
        jp("美咲", "みさき", F, &[(1985, 3), (1986, 2), (1987, 1), (1988, 1), (1989, 2), (1990, 3), (1995, 6)], &["아름다움", "개화"]),
        jp("愛美", "まなみ", F, &[(1985, 4), (1986, 3), (1987, 2), (1988, 3), (1989, 4), (1990, 5), (1995, 8)], &["사랑", "아름다움"]),
        jp("彩", "あや", F, &[(1988, 5), (1989, 4), (1990, 4), (1991, 3), (1992, 4), (1993, 5), (1995, 7)], &["색채", "화려함"]),
        jp("香織", "かおり", F, &[(1990, 6), (1991, 5), (1992, 5), (1993, 6), (1994, 7), (1995, 8), (2000, 10)], &["향기", "우아함"]),
        jp("舞", "まい", F, &[(1990, 7), (1991, 6), (1992, 6), (1993, 7), (1994, 8), (1995, 9), (2000, 9)], &["춤", "우아함"]),
        // Female, Heisei early
        jp("結愛", "ゆあ", F, &[(1995, 2), (1996, 1), (1997, 1), (1998, 2), (1999, 3), (2000, 4), (2005, 7)], &["결합", "사랑"]),
        jp("七海", "ななみ", F, &[(1995, 3), (1996, 2), (1997, 2), (1998, 3), (1999, 4), (2000, 5), (2005, 8)], &["바다", "넓음"]),
        jp("遥", "はるか", F, &[(1998, 4), (1999, 3), (2000, 2), (2001, 2), (2002, 3), (2003, 4), (2005, 6)], &["멀리", "이상향"]),
        jp("花", "はな", F, &[(2000, 6), (2001, 5), (2002, 4), (2003, 3), (2004, 4), (2005, 5), (2010, 8)], &["꽃", "자연적"]),
        jp("心", "こころ", F, &[(2000, 8), (2001, 7), (2002, 6), (2003, 5), (2004, 6), (2005, 7), (2010, 9)], &["마음", "감성"]),
        // Female, Heisei mid-late
        jp("葵", "あおい", F, &[(2005, 2), (2006, 1), (2007, 1), (2008, 1), (2009, 2), (2010, 3), (2015, 6)], &["자연적", "향기"]),
        jp("陽菜", "ひな", F, &[(2005, 3), (2006, 2), (2007, 2), (2008, 3), (2009, 4), (2010, 5), (2015, 8)], &["햇살", "자연적"]),
        jp("凛", "りん", F, &[(2008, 4), (2009, 3), (2010, 2), (2011, 2), (2012, 3), (2013, 4), (2015, 7)], &["당당함", "기품"]),
        jp("咲良", "さくら", F, &[(2010, 6), (2011, 5), (2012, 4), (2013, 3), (2014, 4), (2015, 5), (2020, 8)], &["꽃", "일본적"]),
        jp("音", "おと", F, &[(2010, 8), (2011, 7), (2012, 6), (2013, 5), (2014, 6), (2015, 7), (2020, 9)], &["음악", "감성"]),
        // Female, Heisei late to Reiwa
        jp("紬", "つむぎ", F, &[(2015, 2), (2016, 1), (2017, 1), (2018, 2), (2019, 3), (2020, 4), (2024, 7)], &["전통적", "수공예"]),
        jp("陽葵", "ひまり", F, &[(2015, 4), (2016, 3), (2017, 3), (2018, 4), (2019, 5), (2020, 6), (2024, 8)], &["햇살", "자연적"]),
        jp("芽", "めい", F, &[(2018, 5), (2019, 4), (2020, 3), (2021, 3), (2022, 4), (2023, 5), (2024, 6)], &["새싹", "성장"]),
        jp("莉子", "りこ", F, &[(2020, 7), (2021, 6), (2022, 5), (2023, 4), (2024, 3)], &["자연적", "우아함"]),
        jp("奏", "かなで", F, &[(2020, 5), (2021, 4), (2022, 3), (2023, 3), (2024, 4)], &["음악", "조화"]),
    ]
}

/// The Korean seed table: 30 male and 30 female names across eight
/// generational bands.
pub fn korean_seed() -> Vec<NameRecord> {
    use Gender::{F, M};
    vec![
        // Male, 1950s-1960s
        kr("영수", M, &[(1960, 2), (1961, 1), (1962, 1), (1963, 1), (1964, 2), (1965, 3), (1970, 7), (1975, 10)], &["클래식", "전통적"]),
        kr("철수", M, &[(1960, 4), (1961, 3), (1962, 2), (1963, 3), (1964, 4), (1965, 5), (1970, 8)], &["전통적", "대중적"]),
        kr("성호", M, &[(1965, 7), (1966, 5), (1967, 4), (1968, 3), (1969, 4), (1970, 5), (1975, 8)], &["전통적", "안정적"]),
        kr("진수", M, &[(1965, 8), (1966, 6), (1967, 5), (1968, 4), (1969, 5), (1970, 6), (1975, 9)], &["진취적", "전통적"]),
        kr("정호", M, &[(1968, 6), (1969, 5), (1970, 4), (1971, 4), (1972, 5), (1973, 6), (1974, 7), (1975, 8)], &["정직함", "클래식"]),
        // Male, 1970s-1980s
        kr("현우", M, &[(1975, 3), (1976, 2), (1977, 2), (1978, 3), (1979, 4), (1980, 5), (1985, 8)], &["현대적", "세련됨"]),
        kr("민수", M, &[(1975, 5), (1976, 4), (1977, 3), (1978, 2), (1979, 2), (1980, 3), (1985, 6), (1990, 10)], &["대중적", "친근함"]),
        kr("승호", M, &[(1978, 6), (1979, 5), (1980, 4), (1981, 3), (1982, 4), (1983, 5), (1985, 7)], &["진취적", "활동적"]),
        kr("태우", M, &[(1979, 7), (1980, 6), (1981, 5), (1982, 5), (1983, 6), (1984, 7), (1985, 8)], &["자연적", "강인함"]),
        kr("동현", M, &[(1980, 7), (1981, 6), (1982, 6), (1983, 7), (1984, 8), (1985, 9), (1990, 8)], &["현대적", "도시적"]),
        // Male, 1980s-1990s
        kr("지훈", M, &[(1985, 2), (1986, 1), (1987, 1), (1988, 2), (1989, 3), (1990, 4), (1995, 8)], &["세련됨", "현대적"]),
        kr("준호", M, &[(1985, 4), (1986, 3), (1987, 3), (1988, 4), (1989, 5), (1990, 6), (1995, 9)], &["세련됨", "우아함"]),
        kr("성민", M, &[(1988, 5), (1989, 4), (1990, 3), (1991, 3), (1992, 4), (1993, 5), (1995, 7)], &["성실함", "친근함"]),
        kr("현수", M, &[(1990, 7), (1991, 6), (1992, 5), (1993, 6), (1994, 7), (1995, 8), (2000, 10)], &["현대적", "깔끔함"]),
        kr("민호", M, &[(1990, 5), (1991, 4), (1992, 3), (1993, 4), (1994, 5), (1995, 6), (2000, 9)], &["대중적", "안정적"]),
        // Male, 1990s-2000s
        kr("준영", M, &[(1995, 2), (1996, 1), (1997, 1), (1998, 2), (1999, 3), (2000, 4), (2005, 8)], &["영리함", "세련됨"]),
        kr("건우", M, &[(1995, 3), (1996, 2), (1997, 3), (1998, 4), (1999, 5), (2000, 6), (2005, 9)], &["건강함", "활력"]),
        kr("진우", M, &[(1998, 5), (1999, 4), (2000, 3), (2001, 3), (2002, 4), (2003, 5), (2005, 7)], &["진취적", "친근함"]),
        kr("수빈", M, &[(2000, 7), (2001, 6), (2002, 5), (2003, 6), (2004, 7), (2005, 8), (2010, 10)], &["부드러움", "현대적"]),
        kr("도현", M, &[(2000, 5), (2001, 4), (2002, 3), (2003, 4), (2004, 5), (2005, 6), (2010, 9)], &["도시적", "현대적"]),
        // Male, 2000s-2010s
        kr("서준", M, &[(2005, 2), (2006, 1), (2007, 1), (2008, 1), (2009, 2), (2010, 3), (2015, 6)], &["트렌디", "모던"]),
        kr("민준", M, &[(2005, 3), (2006, 2), (2007, 2), (2008, 3), (2009, 4), (2010, 5), (2015, 8)], &["대중적", "친근함"]),
        kr("예준", M, &[(2008, 4), (2009, 3), (2010, 2), (2011, 2), (2012, 3), (2013, 4), (2015, 7)], &["세련됨", "예의"]),
        kr("도윤", M, &[(2010, 6), (2011, 5), (2012, 4), (2013, 3), (2014, 4), (2015, 5), (2020, 8)], &["부드러움", "조화"]),
        kr("시우", M, &[(2010, 8), (2011, 7), (2012, 6), (2013, 5), (2014, 6), (2015, 7), (2020, 9)], &["자연적", "부드러움"]),
        // Male, 2010s-2020s
        kr("이준", M, &[(2015, 2), (2016, 1), (2017, 1), (2018, 2), (2019, 3), (2020, 4), (2024, 7)], &["트렌디", "간결함"]),
        kr("이안", M, &[(2015, 4), (2016, 3), (2017, 3), (2018, 4), (2019, 5), (2020, 6), (2024, 8)], &["국제적", "모던"]),
        kr("지한", M, &[(2018, 5), (2019, 4), (2020, 3), (2021, 3), (2022, 4), (2023, 5), (2024, 6)], &["강인함", "현대적"]),
        kr("하준", M, &[(2020, 7), (2021, 6), (2022, 5), (2023, 4), (2024, 3)], &["자연적", "부드러움"]),
        kr("지우", M, &[(2020, 5), (2021, 4), (2022, 3), (2023, 3), (2024, 4)], &["부드러움", "친근함"]),
        // Female, 1950s-1960s
        kr("순자", F, &[(1950, 1), (1951, 1), (1952, 2), (1953, 3), (1954, 4), (1955, 5), (1960, 8)], &["전통적", "클래식"]),
        kr("영희", F, &[(1955, 2), (1956, 1), (1957, 1), (1958, 1), (1959, 2), (1960, 3), (1965, 7)], &["대중적", "전통적"]),
        kr("미숙", F, &[(1960, 4), (1961, 3), (1962, 2), (1963, 2), (1964, 3), (1965, 4), (1970, 8)], &["전통적", "우아함"]),
        kr("정숙", F, &[(1960, 6), (1961, 5), (1962, 4), (1963, 4), (1964, 5), (1965, 6), (1970, 9)], &["정숙함", "전통적"]),
        kr("경희", F, &[(1965, 5), (1966, 4), (1967, 3), (1968, 3), (1969, 4), (1970, 5), (1975, 8)], &["우아함", "전통적"]),
        // Female, 1970s-1980s
        kr("은영", F, &[(1975, 2), (1976, 1), (1977, 1), (1978, 2), (1979, 3), (1980, 4), (1985, 7)], &["우아함", "세련됨"]),
        kr("미영", F, &[(1975, 3), (1976, 2), (1977, 2), (1978, 3), (1979, 4), (1980, 5), (1985, 8)], &["아름다움", "대중적"]),
        kr("정미", F, &[(1978, 4), (1979, 3), (1980, 2), (1981, 2), (1982, 3), (1983, 4), (1985, 6)], &["정갈함", "아름다움"]),
        kr("수정", F, &[(1980, 6), (1981, 5), (1982, 4), (1983, 3), (1984, 4), (1985, 5), (1990, 8)], &["순수함", "맑음"]),
        kr("혜진", F, &[(1982, 5), (1983, 4), (1984, 3), (1985, 2), (1986, 3), (1987, 4), (1990, 7)], &["지혜", "진실함"]),
        // Female, 1980s-1990s
        kr("지현", F, &[(1985, 3), (1986, 2), (1987, 1), (1988, 1), (1989, 2), (1990, 3), (1995, 6)], &["지혜", "현명함"]),
        kr("현정", F, &[(1985, 4), (1986, 3), (1987, 2), (1988, 3), (1989, 4), (1990, 5), (1995, 8)], &["현명함", "정숙함"]),
        kr("민정", F, &[(1988, 5), (1989, 4), (1990, 4), (1991, 3), (1992, 4), (1993, 5), (1995, 7)], &["민첩함", "정직함"]),
        kr("수진", F, &[(1990, 6), (1991, 5), (1992, 5), (1993, 6), (1994, 7), (1995, 8), (2000, 10)], &["순수함", "진실함"]),
        kr("유진", F, &[(1990, 7), (1991, 6), (1992, 6), (1993, 7), (1994, 8), (1995, 9), (2000, 9)], &["부드러움", "진실함"]),
        // Female, 1990s-2000s
        kr("예은", F, &[(1995, 2), (1996, 1), (1997, 1), (1998, 2), (1999, 3), (2000, 4), (2005, 7)], &["예의", "은혜"]),
        kr("지은", F, &[(1995, 3), (1996, 2), (1997, 2), (1998, 3), (1999, 4), (2000, 5), (2005, 8)], &["지혜", "은혜"]),
        kr("서현", F, &[(1998, 4), (1999, 3), (2000, 2), (2001, 2), (2002, 3), (2003, 4), (2005, 6)], &["서구적", "현명함"]),
        kr("하영", F, &[(2000, 6), (2001, 5), (2002, 4), (2003, 3), (2004, 4), (2005, 5), (2010, 8)], &["자연적", "영리함"]),
        kr("채원", F, &[(2000, 8), (2001, 7), (2002, 6), (2003, 5), (2004, 6), (2005, 7), (2010, 9)], &["자연적", "원만함"]),
        // Female, 2000s-2010s
        kr("서연", F, &[(2005, 2), (2006, 1), (2007, 1), (2008, 1), (2009, 2), (2010, 3), (2015, 6)], &["세련됨", "현대적"]),
        kr("지우", F, &[(2005, 3), (2006, 2), (2007, 2), (2008, 3), (2009, 4), (2010, 5), (2015, 8)], &["부드러움", "친근함"]),
        kr("수아", F, &[(2008, 4), (2009, 3), (2010, 2), (2011, 2), (2012, 3), (2013, 4), (2015, 7)], &["순수함", "아름다움"]),
        kr("시은", F, &[(2010, 6), (2011, 5), (2012, 4), (2013, 3), (2014, 4), (2015, 5), (2020, 8)], &["시적", "은혜"]),
        kr("채은", F, &[(2010, 8), (2011, 7), (2012, 6), (2013, 5), (2014, 6), (2015, 7), (2020, 9)], &["자연적", "은혜"]),
        // Female, 2010s-2020s
        kr("시아", F, &[(2015, 2), (2016, 1), (2017, 1), (2018, 2), (2019, 3), (2020, 4), (2024, 7)], &["트렌디", "국제적"]),
        kr("지아", F, &[(2015, 4), (2016, 3), (2017, 3), (2018, 4), (2019, 5), (2020, 6), (2024, 8)], &["지혜", "아름다움"]),
        kr("지윤", F, &[(2018, 5), (2019, 4), (2020, 3), (2021, 3), (2022, 4), (2023, 5), (2024, 6)], &["조화", "부드러움"]),
        kr("서윤", F, &[(2020, 7), (2021, 6), (2022, 5), (2023, 4), (2024, 3)], &["세련됨", "조화"]),
        kr("하은", F, &[(2020, 5), (2021, 4), (2022, 3), (2023, 3), (2024, 4)], &["자연적", "은혜"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes_and_gender_split() {
        for seed in [japanese_seed(), korean_seed()] {
            assert_eq!(seed.len(), 60);
            let male = seed.iter().filter(|n| n.gender == Gender::M).count();
            assert_eq!(male, 30);
        }
    }

    #[test]
    fn test_all_ranks_within_top_ten() {
        for name in japanese_seed().iter().chain(korean_seed().iter()) {
            assert!(!name.yearly_ranks.is_empty(), "{} has no ranks", name.display);
            for (&year, &rank) in &name.yearly_ranks {
                assert!((1..=10).contains(&rank), "{} {year} -> {rank}", name.display);
            }
        }
    }

    #[test]
    fn test_japanese_entries_carry_readings() {
        for name in japanese_seed() {
            assert!(name.reading.is_some(), "{} missing reading", name.display);
        }
        for name in korean_seed() {
            assert!(name.reading.is_none(), "{} should be hangul-only", name.display);
        }
    }

    #[test]
    fn test_display_gender_pairs_are_unique() {
        // 지우 is shared across genders, so uniqueness is per (display, gender).
        for seed in [japanese_seed(), korean_seed()] {
            let mut keys: Vec<(String, bool)> = seed
                .iter()
                .map(|n| (n.display.clone(), n.gender == Gender::M))
                .collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), 60);
        }
    }

    #[test]
    fn test_known_peak_example() {
        let seed = japanese_seed();
        let haruto = seed.iter().find(|n| n.display == "陽翔").unwrap();
        assert_eq!(crate::trend::peak_year(&haruto.yearly_ranks), Some(2007));
    }
}
