use lexamend_document::{Block, Document};
use lexamend_parser::AmendmentBlock;

/// A consolidated article in the flat layout most scrapers produce:
/// division headings fused with their first line of content, alinéas as
/// top-level siblings.
pub fn flat_article() -> Document {
    Document::with_title(
        "Article 224",
        vec![
            Block::new("I.-Les dispositions générales s'appliquent."),
            Block::new("Elles précisent le champ retenu."),
            Block::new("II.-Le régime spécial est défini."),
            Block::new("Les conditions sont fixées par décret."),
            Block::new("Un arrêté précise les modalités."),
            Block::new("La première phrase s'applique. Il comporte une seconde phrase."),
            Block::new("III.-Les sanctions sont prévues."),
            Block::new("Une disposition finale clôt l'article."),
        ],
    )
}

/// The interchange form of a nested code extract, as handed over by the
/// scraping collaborator
pub fn nested_extract_json() -> &'static str {
    r#"{
        "title": "Livre II",
        "blocks": [
            {
                "text": "Chapitre Ier : Objet",
                "children": [{ "text": "L'objet est défini." }]
            },
            {
                "text": "Chapitre III : Sanctions",
                "children": [
                    { "text": "Les sanctions sont graduées." },
                    { "text": "Elles se prescrivent par trois ans." }
                ]
            }
        ]
    }"#
}

/// A realistic run of extracted amendment sentences, in publication
/// order. Block 224-5 carries an unterminated quotation.
pub fn amendment_blocks() -> Vec<AmendmentBlock> {
    let texts = [
        "Le dernier alinéa du II est abrogé.",
        "La seconde phrase du premier alinéa est remplacée par deux phrases ainsi rédigées : \
         « Le délai est de six mois. » et « Il court à compter de la notification. »",
        "Après le deuxième alinéa, il est inséré un alinéa ainsi rédigé : \
         « Les modalités sont précisées par arrêté. »",
        "Au premier alinéa, les mots : « trois mois » sont remplacés par les mots : « six mois ».",
        "Le I est complété par un alinéa ainsi rédigé : « La citation ne se referme jamais.",
        "L'article L. 112-3 du code rural est ainsi rédigé : \
         « Art. L. 112-3.-Le texte nouveau s'applique. »",
        "Le 2° du III de l'article 7 de la loi n° 2019-1147 du 8 novembre 2019 est supprimé.",
        "Les 1° à 4° du II sont abrogés.",
        "Il est ajouté un III ainsi rédigé : « III.-Les sanctions sont définies par décret. »",
        "Le présent article s'applique aux contrats conclus après la publication.",
    ];
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| AmendmentBlock::new(format!("224-{}", i + 1), i, *text))
        .collect()
}
