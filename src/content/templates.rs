//! Bundled pill templates, used when the remote generator is unavailable.

use rand::Rng;

use crate::model::{Category, PillDraft};

struct Template {
	title: &'static str,
	content: &'static str,
	tags: &'static [&'static str],
}

const STORIA_IT: &[Template] = &[
	Template {
		title: "Il trasformismo di Depretis",
		content: "Con l'avvento della Sinistra storica nel 1876, Agostino Depretis inaugurò una prassi parlamentare fondata sull'assorbimento degli oppositori nella maggioranza di governo. Il trasformismo neutralizzò la dialettica tra Destra e Sinistra, sostituendo i programmi con accordi personali e clientelari. La storiografia, da Croce a Gramsci, vi ha letto ora un fattore di stabilità, ora il segno di una debolezza strutturale dello Stato liberale.",
		tags: &["Stato liberale", "Parlamento", "Ottocento"],
	},
	Template {
		title: "La Costituente e il compromesso del 1947",
		content: "L'Assemblea Costituente eletta il 2 giugno 1946 produsse una Carta frutto dell'incontro tra culture politiche diverse: cattolica, socialista, comunista e liberale. L'equilibrio tra diritti di libertà e diritti sociali, come il lavoro posto a fondamento della Repubblica, riflette quel compromesso. Piero Calamandrei parlò di una rivoluzione promessa in cambio di una rivoluzione mancata.",
		tags: &["Costituzione", "Novecento", "Repubblica"],
	},
];

const GEOPOLITICA: &[Template] = &[
	Template {
		title: "Il Heartland di Mackinder",
		content: "Nel 1904 Halford Mackinder propose che il controllo dell'area centrale dell'Eurasia, il cosiddetto Heartland, garantisse il dominio dell'isola mondiale e quindi del pianeta. La teoria influenzò tanto la geopolitica tedesca tra le due guerre quanto la strategia americana del contenimento. Ancora oggi viene evocata nei dibattiti sulle rotte energetiche e sulle infrastrutture continentali.",
		tags: &["Eurasia", "Novecento", "Potenza"],
	},
	Template {
		title: "La trappola di Tucidide",
		content: "Graham Allison ha coniato l'espressione per descrivere la tensione strutturale che nasce quando una potenza emergente minaccia di sostituirne una egemone, come Atene con Sparta. Su sedici casi storici esaminati, dodici sfociarono in guerra. Il concetto è diventato centrale nell'analisi dei rapporti tra Stati Uniti e Cina.",
		tags: &["Potenza", "Egemonia", "Cina"],
	},
];

const ATTUALITA: &[Template] = &[
	Template {
		title: "L'economia dell'attenzione",
		content: "Herbert Simon osservò già nel 1971 che una ricchezza di informazioni genera una povertà di attenzione. Le piattaforme digitali hanno trasformato questa scarsità in una risorsa economica, ottimizzando i contenuti per trattenere l'utente. Ne derivano effetti sulla qualità del dibattito pubblico, sulla polarizzazione e sulla sostenibilità del giornalismo.",
		tags: &["Media", "Piattaforme", "Democrazia"],
	},
	Template {
		title: "La transizione energetica europea",
		content: "Il Green Deal europeo fissa la neutralità climatica al 2050 e riorganizza politica industriale, mercato dell'energia e commercio estero attorno a questo obiettivo. La crisi del gas del 2022 ha accelerato la diversificazione delle forniture e l'installazione di rinnovabili. Restano aperte le questioni della distribuzione dei costi sociali e della dipendenza dalle materie prime critiche.",
		tags: &["Europa", "Clima", "Energia"],
	},
];

const LETTERATURA: &[Template] = &[
	Template {
		title: "Il correlativo oggettivo in Montale",
		content: "Negli Ossi di seppia Montale affida le emozioni a oggetti concreti e paesaggi liguri: il muro con i cocci di bottiglia, la divina indifferenza, il male di vivere. La tecnica, affine al correlativo oggettivo teorizzato da Eliot, evita la confessione diretta e consegna al lettore un simbolo da decifrare. È uno dei tratti che separano Montale dalla tradizione lirica ottocentesca.",
		tags: &["Poesia", "Novecento", "Simbolismo"],
	},
	Template {
		title: "La questione della lingua",
		content: "Dal De vulgari eloquentia di Dante alle Prose della volgar lingua di Bembo, fino alla risciacquatura in Arno di Manzoni, la letteratura italiana ha discusso per secoli quale lingua adottare. La scelta del fiorentino trecentesco come modello letterario precedette di secoli l'unificazione politica. Solo con la scuola e la televisione l'italiano divenne lingua parlata dalla maggioranza.",
		tags: &["Lingua", "Manzoni", "Identità nazionale"],
	},
];

const ARTE: &[Template] = &[
	Template {
		title: "La prospettiva come forma simbolica",
		content: "Erwin Panofsky sostenne nel 1927 che la prospettiva lineare del Rinascimento non è una semplice tecnica, ma l'espressione di una visione del mondo. Lo spazio misurabile e omogeneo di Brunelleschi e Alberti corrisponde a un soggetto che ordina razionalmente la realtà. La tesi ha aperto la strada all'iconologia come lettura culturale delle immagini.",
		tags: &["Rinascimento", "Iconologia", "Simbolismo"],
	},
	Template {
		title: "Il Futurismo e la velocità",
		content: "Il manifesto di Marinetti del 1909 celebrò l'automobile ruggente come più bella della Vittoria di Samotracia. Boccioni e Balla tradussero in pittura e scultura il dinamismo della vita moderna, scomponendo il movimento in linee di forza. Il rapporto del movimento con il nazionalismo e poi con il fascismo resta un nodo critico ineludibile.",
		tags: &["Avanguardie", "Novecento", "Modernità"],
	},
];

const MUSICA: &[Template] = &[
	Template {
		title: "Adorno e l'industria culturale",
		content: "Nella Dialettica dell'illuminismo Adorno e Horkheimer descrissero la musica di consumo come prodotto standardizzato, dove la ripetizione dello schema rende l'ascolto passivo. La critica, rivolta soprattutto alla popular music, è stata contestata dagli studi culturali. Resta però un punto di partenza per ogni sociologia della musica.",
		tags: &["Sociologia", "Media", "Modernità"],
	},
	Template {
		title: "Verdi e il Risorgimento",
		content: "Il coro Va, pensiero del Nabucco è stato a lungo letto come inno patriottico, e il grido Viva Verdi come acrostico di Vittorio Emanuele Re d'Italia. La musicologia recente ha ridimensionato queste letture, mostrandone in parte la costruzione a posteriori. Il mito verdiano rivela comunque il ruolo dell'opera nella formazione di un'identità nazionale.",
		tags: &["Opera", "Ottocento", "Identità nazionale"],
	},
];

fn templates(category: Category) -> &'static [Template] {
	match category {
		Category::StoriaIt => STORIA_IT,
		Category::Geopolitica => GEOPOLITICA,
		Category::Attualita => ATTUALITA,
		Category::Letteratura => LETTERATURA,
		Category::Arte => ARTE,
		Category::Musica => MUSICA,
	}
}

/// Every bundled draft for `category`, in a fixed order.
pub fn all_drafts(category: Category) -> Vec<PillDraft> {
	templates(category)
		.iter()
		.map(|t| PillDraft::new(t.title, t.content, t.tags))
		.collect()
}

/// One bundled draft for `category`, chosen at random.
pub fn pick_draft<R: Rng + ?Sized>(category: Category, rng: &mut R) -> PillDraft {
	let set = templates(category);
	let t = &set[rng.gen_range(0..set.len())];
	PillDraft::new(t.title, t.content, t.tags)
}
