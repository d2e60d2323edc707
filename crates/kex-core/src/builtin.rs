//! Built-in example data: a music-gear synonym tree and a short sample corpus.
//!
//! Used when no dictionary or corpus file is given, and by the test suites.

use crate::types::SynonymNode;

fn leaf(names: &[&str]) -> SynonymNode {
    SynonymNode::new(names.iter().copied())
}

fn genre(names: &[&str], children: Vec<SynonymNode>) -> SynonymNode {
    leaf(names).with_children(children)
}

/// Music › Guitar / Bass.
pub fn sample_dictionary() -> Vec<SynonymNode> {
    let guitar = genre(
        &["ギター", "Guitar"],
        vec![
            leaf(&["7弦", "ヘッドレス"]),
            leaf(&["弦", "ストリング", "String"]),
            genre(
                &["エフェクター", "Effector"],
                vec![leaf(&["Boss", "ボス"]), leaf(&["Mooer"]), leaf(&["Line6", "Line 6"])],
            ),
            leaf(&["チューナー", "Tune", "Tuner"]),
            leaf(&["ペダル"]),
            leaf(&["シールド", "ケーブル", "パッチ"]),
            leaf(&["アンプ", "Amp"]),
            // models
            leaf(&["ストラト", "ストラトキャスター", "Strat", "Stratocaster", "ST"]),
            genre(
                &["テレキャス", "テレキャスター", "Tele", "TL"],
                vec![leaf(&["エスクワイア", "エスクワイヤ", "Esquire"])],
            ),
            leaf(&["レスポ", "レスポール", "Les Paul", "LP"]),
            genre(&["SG"], vec![leaf(&["SG1000", "SG-1000"])]),
            leaf(&["モッキン", "モッキンバード", "Mockingbird", "MG", "MK"]),
            leaf(&["RG", "JEM"]),
            // makers
            leaf(&["フェンダー", "Fender"]),
            leaf(&["スクワイア", "スクワイヤ", "Squier"]),
            leaf(&["ギブソン", "Gibson"]),
            leaf(&["ヤマハ", "Yamaha"]),
            leaf(&["フェルナンデス", "Fernandes"]),
            leaf(&["バーニー", "Burny"]),
            leaf(&["アイバニーズ", "Ibanez"]),
            leaf(&["フォトジェニ", "フォトジェニック", "PhotoGenic", "Photo Genic"]),
            leaf(&["Legend"]),
            leaf(&["鰤", "Blitz"]),
            leaf(&["バッカス", "Bacchus"]),
            leaf(&["ヴィンテージ", "ビンテージ", "Vintage"]),
            leaf(&["スタインバーガー", "Steinberger", "ホーナー", "Hohner"]),
        ],
    );

    let bass = genre(
        &["ベース", "Bass"],
        vec![
            leaf(&["5弦"]),
            leaf(&["ジャズベ", "ジャズベース", "Jazz Bass"]),
            leaf(&["プレベ", "プレシジョンベース", "Precision Bass"]),
        ],
    );

    vec![genre(&["音楽", "Music"], vec![guitar, bass])]
}

/// Seven sample lines about music and gear.
pub fn sample_corpus() -> Vec<String> {
    [
        "これはサンプルテキストです",
        "Boss コンパクトエフェクターを購入しました",
        "趣味はギターです",
        "音楽を聴くのが好きです",
        "ボスコンの中でも MT-2 が至高",
        "7弦ギターが欲しいな～",
        "ジャズベでドンシャリサウンド",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
