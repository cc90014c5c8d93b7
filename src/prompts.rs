// Instruction blocks forwarded verbatim to the core service. The core adds
// its own shared rules (no journalist names, closing summary, 1500+ chars).

pub const MAX_TOKENS: u32 = 4000;
pub const TEMPERATURE: f32 = 0.7;

pub const TITLE_EMOJIS: [&str; 7] = ["🔥", "📈", "💡", "✨", "🎯", "💕", "❤️"];

const SYSTEM_MESSAGE: &[&str] = &[
    "あなたはプロのコンテンツライターで、ベテランの編集者でもあります。",
    "収集した情報を基に、読みやすく興味深い記事を作成してください。",
];

const USER_PROMPT: &[&str] = &[
    "上記の情報のみを基に、以下の要件で記事を作成してください:",
    "- 収集した情報以外には言及せず、提供された情報のみを使用する",
    "- 見出し（##）を使って構造化する",
    "- 見出しの直後に文章を続け、見出しと本文の間に空行を入れないでください",
    "- 文章の後には改行を2つほど入れるようにしてください",
    "- 各段落の間に適度に改行を入れて読みやすくしてください",
    "- 適切な箇所に絵文字（📝、💡、✨、🎯、📊、💬、🌟など）を入れて視覚的に読みやすくしてください",
    "- 絵文字を付ける場合は、その文の末尾に句読点（。、）をつけないでください（例：「注目が集まります💬」のように）",
    "- 専門用語や重要なキーワードが登場する際は、そのセクションの下部に「【キーワード】キーワード名」という見出し形式で注釈を追加してください",
    "- 注釈には、意味、詳細な説明、関連する数値や具体例を改行で分けて記載してください",
    "- 注釈の各行の先頭に、内容に適した絵文字（📝、💡、✨、🎯、📊、💬、🌟、📌、🔍、📖、💼、⚡、🌊、🌍など）を追加してください",
    "- 注釈の各行の間には必ず空行（改行を2つ）を入れて、読みやすくしてください（例：「【キーワード】積乱雲\n\n⚡ 垂直に発達した雲で、雷や突風、ひょうを伴うことが多い\n\n📊 高度10km以上にまで達することがあり、非常に激しい天気現象を引き起こす\n\n💡 形状は cauliflower（カリフラワー）に似た特徴的な形をしている」のように）",
    "- 略語の場合は正式名称や展開も含めてください",
    "- 情報の要点を分かりやすく説明する",
    "- 収集した情報に対して、無難で建設的な自分の意見や考察を加える",
    "- 情報を解釈し、読者にとって価値のある洞察を提供する",
    "- 記事の最後に、必ず「#博識 #知的 #学習 #情報」の4つのハッシュタグを追加してください",
    "- その後に、記事の内容に関連するキーワードから20個ほどのハッシュタグを追加してください（例：「#経済 #政策 #GDP #市場」など）",
];

pub fn system_message() -> String {
    SYSTEM_MESSAGE.join("\n")
}

pub fn user_prompt() -> String {
    USER_PROMPT.join("\n")
}

pub fn title_emojis() -> Vec<String> {
    TITLE_EMOJIS.iter().map(|e| e.to_string()).collect()
}
