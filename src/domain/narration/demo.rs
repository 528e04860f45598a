//! Narration Context - 内置演示台本
//!
//! 天领酒造导览的 4 分钟演示台本，未配置外部台本文件时使用

use super::catalog::NarrationCatalog;
use super::errors::CatalogError;

/// 内置演示台本（TOML 格式，与外部台本文件同构）
const DEMO_CATALOG_TOML: &str = r#"
[[unit]]
id = "intro_1"
section = "クラバトラー自己紹介"
duration_secs = 15
text = """
ようこそ、天領酒造へお越しくださいました。
わたくしは「クラバトラー」と申します。"""

[[unit]]
id = "intro_2"
section = "クラバトラー自己紹介"
duration_secs = 20
text = """
最新のAI技術により、この歴史ある蔵の物語を、
皆様にお伝えする案内役として生まれました。
クラバトラーという名前は、「蔵」と「バトラー」を組み合わせたもの。"""

[[unit]]
id = "intro_3"
section = "クラバトラー自己紹介"
duration_secs = 25
text = """
340年以上の歴史を持つこの蔵で、
代々受け継がれてきた知恵と技、そして想いを、
現代の技術でわかりやすくお伝えすることが、わたくしの使命でございます。"""

[[unit]]
id = "history_1"
section = "天領酒造の歴史"
duration_secs = 30
text = """
天領酒造の歴史は、延宝8年、西暦1680年まで遡ります。
江戸時代前期、徳川4代将軍家綱の時代に、
ここ飛騨国益田郡萩原村で産声を上げました。"""

[[unit]]
id = "history_2"
section = "天領酒造の歴史"
duration_secs = 30
text = """
「天領」という名は、江戸幕府の直轄地「天領飛騨」に由来します。
幕府に納める年貢米の品質は極めて高く、
その米と、飛騨山脈から湧き出る清冽な水が出会いました。"""

[[unit]]
id = "terroir_1"
section = "飛騨のテロワール"
duration_secs = 30
text = """
日本酒造りにおいて、最も重要な要素は「米」「水」「気候」、そして「人」です。
天領酒造の仕込み水は、飛騨山脈の地下深くを流れる伏流水です。"""

[[unit]]
id = "terroir_2"
section = "飛騨のテロワール"
duration_secs = 30
text = """
標高3000メートル級の山々に降った雪が、
長い年月をかけて地層を通り抜け、
蔵の地下55メートルから汲み上げられます。"""

[[unit]]
id = "philosophy_1"
section = "酒造り哲学"
duration_secs = 30
text = """
天領酒造が340年以上守り続けてきたのは、「手造りの心」です。
機械化が進む現代でも、麹造りは職人の手によって行われます。"""

[[unit]]
id = "philosophy_2"
section = "酒造り哲学"
duration_secs = 30
text = """
「酒は生き物」—これが私たちの信念です。
職人は、泡の立ち方、香り、音、そして舌で感じる味の変化から、
酒の声を聴き取ります。"""

[[unit]]
id = "closing"
section = "締めの言葉"
duration_secs = 20
text = """
さて、これから皆様には、実際の酒造りの工程をご覧いただきます。
340年の時を超えて受け継がれる、職人たちの技と想いを、
どうぞごゆっくりとお楽しみください。"""
"#;

/// 构建内置演示台本目录
pub fn demo_catalog() -> Result<NarrationCatalog, CatalogError> {
    NarrationCatalog::from_toml_str(DEMO_CATALOG_TOML)
}
