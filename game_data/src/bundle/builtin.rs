//! The built-in 快乐星球 bundle - the shipped story of a child and their
//! father, told through three desktop icons.

use std::collections::HashMap;

use super::{
    EndingRecord, EndingTable, GameBundle, IconEffect, IconEffects, IconRecord, Outcome, PerIcon,
    Recipe, RecipeBook,
};

// Item names. Crafting identity is the name itself, so these constants are
// the single source of truth for the recipe and effect tables below.
const LITTLE_PRINCE: &str = "一本《小王子》";
const HAND_DRAWN_MAP: &str = "一张手绘的地图";
const INK_PEN: &str = "一支沾着墨水的钢笔";
const CALCULUS_BOOK: &str = "那本未读完的《高等数学》";
const STOCK_REPORT: &str = "一份带有红色箭头（下跌）的股票报告";
const STRONG_TEA: &str = "一杯浓茶";

fn recipe(first: &str, second: &str, result: &str) -> Recipe {
    Recipe {
        first: first.to_string(),
        second: second.to_string(),
        result: result.to_string(),
    }
}

fn heal(narrative: &str) -> IconEffect {
    IconEffect {
        outcome: Outcome::Heal,
        narrative: narrative.to_string(),
    }
}

fn no_heal(narrative: &str) -> IconEffect {
    IconEffect {
        outcome: Outcome::NoHeal,
        narrative: narrative.to_string(),
    }
}

impl GameBundle {
    /// The complete built-in bundle.
    pub fn builtin() -> Self {
        let icons = PerIcon {
            docs: IconRecord {
                title: "我的文档".to_string(),
                content: "一个夜晚，我独自坐在书桌前，桌上堆着文科的书籍，如历史、文学、哲学。\
                          笔尖悬在纸上，我却迟迟没有落下。你脑中回荡着父亲那句“没有用”，\
                          让你对自己所选择的热爱产生了深深的怀疑。你感到自己的兴趣和才华，\
                          仿佛成了被社会标准评判的“废物”。"
                    .to_string(),
            },
            network: IconRecord {
                title: "网上邻居".to_string(),
                content: "爸爸的办公室或书房。电脑屏幕。桌上的茶杯里，枸杞和茶叶沉浮着。\
                          他疲惫地揉着太阳穴，桌上放着一本他年轻时未读完的《高等数学》。"
                    .to_string(),
            },
            recycle: IconRecord {
                title: "回收站".to_string(),
                content: "我，这里。他，那里。\n中间，一张破碎的圆。汤，凉了。\n\
                          数字跳舞。文字游走。\n目光，交汇不了。只剩下，疲惫的影子。\n\
                          他眼里的K线，我笔下的诗。无声的河流。"
                    .to_string(),
            },
        };

        let initial_items = PerIcon {
            docs: vec![
                LITTLE_PRINCE.to_string(),
                HAND_DRAWN_MAP.to_string(),
                INK_PEN.to_string(),
            ],
            network: vec![
                CALCULUS_BOOK.to_string(),
                STOCK_REPORT.to_string(),
                STRONG_TEA.to_string(),
            ],
            recycle: Vec::new(),
        };

        let recipes = vec![
            recipe(LITTLE_PRINCE, HAND_DRAWN_MAP, "星空航路图"),
            recipe(LITTLE_PRINCE, INK_PEN, "童话之笔"),
            recipe(HAND_DRAWN_MAP, INK_PEN, "探险家日记"),
            recipe(STOCK_REPORT, CALCULUS_BOOK, "确定性公式"),
            recipe(STRONG_TEA, CALCULUS_BOOK, "苦涩人生公式"),
            recipe(STRONG_TEA, STOCK_REPORT, "风险与代价"),
            recipe(LITTLE_PRINCE, STOCK_REPORT, "被定价的玫瑰"),
            recipe(LITTLE_PRINCE, STRONG_TEA, "苦涩的星光"),
            recipe(STRONG_TEA, HAND_DRAWN_MAP, "流淌着泪水的航路"),
            recipe(STOCK_REPORT, INK_PEN, "冰冷的笔触"),
            recipe(STRONG_TEA, INK_PEN, "墨香的苦涩"),
        ];

        let mut effects: HashMap<String, IconEffects> = HashMap::new();

        // The child's wound: sacred items forged from their own treasures.
        effects.insert(
            "星空航路图".to_string(),
            IconEffects {
                docs: Some(heal(
                    "你找回了童年时对星空的向往，和那份不受拘束的想象力。\
                     你意识到，内心的宇宙，远比现实的枷锁要广阔。",
                )),
                ..Default::default()
            },
        );
        effects.insert(
            "童话之笔".to_string(),
            IconEffects {
                docs: Some(heal(
                    "你重新获得了用纯真视角描绘世界的能力。那些被“理性”划掉的奇思妙想，\
                     现在都重新闪耀着光芒。",
                )),
                ..Default::default()
            },
        );
        effects.insert(
            "探险家日记".to_string(),
            IconEffects {
                docs: Some(heal(
                    "你肯定了自我探索的价值。你明白，人生的地图并非只有一条世俗意义上的\
                     成功路径，每一条岔路都有独特的风景。",
                )),
                ..Default::default()
            },
        );

        // The father's world.
        effects.insert(
            "确定性公式".to_string(),
            IconEffects {
                network: Some(heal(
                    "父亲理解了，冰冷的数字背后也可以有温度。他开始在不确定的市场中，\
                     寻找家庭带来的那份“确定”的幸福。",
                )),
                ..Default::default()
            },
        );
        effects.insert(
            "苦涩人生公式".to_string(),
            IconEffects {
                network: Some(no_heal(
                    "公式算尽了苦涩，却没有给出解。父亲把茶一饮而尽，\
                     又转回屏幕前红绿交错的数字。",
                )),
                ..Default::default()
            },
        );
        effects.insert(
            "风险与代价".to_string(),
            IconEffects {
                network: Some(heal(
                    "父亲放下了对失控的恐惧。他认识到，最大的风险不是投资失败，\
                     而是错过与家人共度的时光。",
                )),
                ..Default::default()
            },
        );

        // The rift between them.
        effects.insert(
            "苦涩的星光".to_string(),
            IconEffects {
                recycle: Some(heal(
                    "你们理解了彼此的重担。父亲的浓茶与你的星光，\
                     都是为了守护心中重要之物而付出的努力。",
                )),
                ..Default::default()
            },
        );
        effects.insert(
            "流淌着泪水的航路".to_string(),
            IconEffects {
                recycle: Some(heal(
                    "你明白了父亲的苦涩，父亲也看到了你内心的航图。\
                     你们的泪水汇成河流，载着理解与爱，流向远方。",
                )),
                ..Default::default()
            },
        );
        effects.insert(
            "冰冷的笔触".to_string(),
            IconEffects {
                recycle: Some(heal(
                    "你与父亲都意识到，无论是冰冷的数字还是感性的文字，\
                     都不应成为伤害对方的武器，而应是沟通的桥梁。",
                )),
                ..Default::default()
            },
        );
        effects.insert(
            "墨香的苦涩".to_string(),
            IconEffects {
                recycle: Some(no_heal(
                    "墨香与苦涩混在一起，沉进桶底。没有人弯腰去捡。",
                )),
                ..Default::default()
            },
        );
        effects.insert(
            "被定价的玫瑰".to_string(),
            IconEffects {
                recycle: Some(no_heal(
                    "玫瑰被标上了价格，连同它的星球一起，落进回收站最深处。",
                )),
                ..Default::default()
            },
        );

        let endings = EndingTable {
            compass: EndingRecord {
                title: "《迷失的罗盘》".to_string(),
                description: "你们在各自的世界里继续走着，手里的罗盘再也指不出对方的方向。\
                              裂痕还在，汤彻底凉了。"
                    .to_string(),
            },
            bridge: EndingRecord {
                title: "《心与心的桥梁》".to_string(),
                description: "你和父亲，终于在各自的世界里，看到了彼此。\
                              裂痕被理解的暖流弥合。破碎的圆，重新变得完整。\
                              原来，快乐星球，不在遥远的星际，而在每一个愿意沟通与和解的，当下。"
                    .to_string(),
            },
            lie: EndingRecord {
                title: "《善意的谎言》".to_string(),
                description: "你治好了自己，也替父亲圆了一个他自己都不信的谎。\
                              饭桌上有了笑声，只是茶还是那么苦。"
                    .to_string(),
            },
            worlds: EndingRecord {
                title: "《平行世界》".to_string(),
                description: "你们学会了隔着屏幕彼此问候。两个世界依旧平行，\
                              只是偶尔，会有一束光从缝隙里穿过去。"
                    .to_string(),
            },
            dinner: EndingRecord {
                title: "《一顿沉默的晚餐》".to_string(),
                description: "你找回了自己的热爱，父亲守着他的K线。\
                              那天晚饭，谁都没有说话，汤冷得很快。"
                    .to_string(),
            },
        };

        let recipes = RecipeBook::new(recipes).expect("builtin recipe table has no duplicate pairs");
        let bundle = Self {
            icons,
            initial_items,
            recipes,
            effects,
            endings,
        };
        debug_assert!(bundle.validate().is_ok());
        bundle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{EndingKey, IconKey};

    #[test]
    fn test_builtin_bundle_is_valid() {
        let bundle = GameBundle::builtin();
        bundle.validate().unwrap();
        assert_eq!(bundle.recipes.len(), 11);
        assert_eq!(bundle.initial_items(IconKey::Docs).len(), 3);
        assert_eq!(bundle.initial_items(IconKey::Network).len(), 3);
        assert!(bundle.initial_items(IconKey::Recycle).is_empty());
    }

    #[test]
    fn test_builtin_ending_titles() {
        let bundle = GameBundle::builtin();
        assert_eq!(bundle.ending(EndingKey::Compass).title, "《迷失的罗盘》");
        assert_eq!(bundle.ending(EndingKey::Bridge).title, "《心与心的桥梁》");
    }

    #[test]
    fn test_builtin_every_sacred_item_has_an_effect() {
        let bundle = GameBundle::builtin();
        for recipe in bundle.recipes.iter() {
            assert!(
                bundle.has_effects_for(&recipe.result),
                "no effect entry for {}",
                recipe.result
            );
        }
    }

    #[test]
    fn test_builtin_docs_recipes_cover_all_pairs() {
        // Every unordered pair of docs starting items forms a recipe, so the
        // designed early-failure path never fires with the shipped data.
        let bundle = GameBundle::builtin();
        let docs = bundle.initial_items(IconKey::Docs);
        for i in 0..docs.len() {
            for j in (i + 1)..docs.len() {
                assert!(bundle.find_recipe(&docs[i], &docs[j]).is_some());
            }
        }
    }

    #[test]
    fn test_builtin_round_trips_through_json() {
        let bundle = GameBundle::builtin();
        let json = serde_json::to_string(&bundle).unwrap();
        let reloaded = GameBundle::from_json_str(&json).unwrap();
        assert_eq!(reloaded, bundle);
    }
}
